#[macro_use] extern crate rocket;
extern crate env_logger;
use meal_o_matic::api::models::MealDbSettings;
use meal_o_matic::api::ResourceServiceFactory;
use meal_o_matic::routes;

#[launch]
fn rocket() -> _ {
    // Lets RUST_LOG live in .env alongside the other settings
    dotenv::dotenv().ok();
    env_logger::init();
    let resource_service = ResourceServiceFactory::create_or_panic();
    let settings = MealDbSettings::from_env();
    routes::build_rocket(resource_service, &settings)
}
