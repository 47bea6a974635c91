mod recipe_service;
mod recipe_service_factory;
mod video_probe_service;
mod image_cache_service;
mod checklist_service;
mod resource_service;
mod resource_service_factory;
pub mod models;
#[cfg(test)]
pub(crate) mod test_support;

pub use recipe_service::*;
pub use recipe_service_factory::*;
pub use video_probe_service::*;
pub use image_cache_service::*;
pub use checklist_service::*;
pub use resource_service::*;
pub use resource_service_factory::*;
