use reqwest::Client;
use crate::api::models::MealDbSettings;
use crate::api::{ ImageCacheService, RecipeService, ResourceService, VideoProbeService };

const USER_AGENT: &str = concat!("meal-o-matic/", env!("CARGO_PKG_VERSION"));

pub struct RecipeServiceFactory {}

impl RecipeServiceFactory {
    pub fn create_client_or_panic(settings: &MealDbSettings) -> Client {
        Client::builder()
            .timeout(settings.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|error| panic!("Couldn't build HTTP client: {}", error))
    }

    pub fn create_or_panic(resource_service: ResourceService, settings: &MealDbSettings) -> (RecipeService, VideoProbeService, ImageCacheService) {
        log::info!("Using recipe service at {}", settings.base_url);
        let client = Self::create_client_or_panic(settings);
        (
            RecipeService::new(resource_service.clone(), client.clone(), settings),
            VideoProbeService::new(resource_service.clone(), client.clone(), settings),
            ImageCacheService::new(resource_service, client)
        )
    }
}
