mod meal_db_error;
mod meal_category;
mod meal_summary;
mod recipe;
mod recipe_detail;
mod fetch_outcome;
mod checklist;
mod cached_image;
mod meal_db_settings;
mod input_error;
pub mod json_fields;
pub mod resources_xml;

pub use meal_db_error::*;
pub use meal_category::*;
pub use meal_summary::*;
pub use recipe::*;
pub use recipe_detail::*;
pub use fetch_outcome::*;
pub use checklist::*;
pub use cached_image::*;
pub use meal_db_settings::*;
pub use input_error::*;
