use std::collections::HashMap;
use std::sync::{ Arc, PoisonError, RwLock };
use reqwest::header::CONTENT_TYPE;
use reqwest::{ Client, Url };
use serde_json::json;
use crate::api::models::{ CachedImage, MealDbError };
use crate::api::ResourceService;

/// Process-wide url -> image cache. Entries are never evicted and the first
/// successful load of a url wins.
#[derive(Clone)]
pub struct ImageCacheService {
    resource_service: ResourceService,
    client: Client,
    images: Arc<RwLock<HashMap<String, CachedImage>>>
}

impl ImageCacheService {
    pub fn new(resource_service: ResourceService, client: Client) -> ImageCacheService {
        ImageCacheService {
            resource_service,
            client,
            images: Arc::new(RwLock::new(HashMap::new()))
        }
    }

    pub fn get(&self, url: &str) -> Option<CachedImage> {
        self.images.read().unwrap_or_else(PoisonError::into_inner).get(url).cloned()
    }

    pub async fn load(&self, url: &str) -> Result<CachedImage, MealDbError> {
        if let Some(cached_image) = self.get(url) {
            log::debug!("{}", self.resource_service.render("image_cache_hit_debug_message_template", &json!({ "url": url })));
            return Ok(cached_image);
        }
        let parsed_url = Url::parse(url).map_err(|error| MealDbError::InvalidRequest(format!("{}: {}", url, error)))?;
        log::info!("{}", self.resource_service.render("image_cache_miss_info_message_template", &json!({ "url": url })));
        let response = self.client.get(parsed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(MealDbError::Status(status.as_u16()));
        }
        let content_type = response.headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        // Error pages served with 200 must not be cached as thumbnails
        if !Self::is_image_content_type(content_type.as_deref()) {
            return Err(MealDbError::NotAnImage(content_type.unwrap_or_else(|| "no content type".to_string())));
        }
        let bytes = response.bytes().await?.to_vec();
        let mut images = self.images.write().unwrap_or_else(PoisonError::into_inner);
        // Another load of the same url may have finished while this one was in flight
        let cached_image = images
            .entry(url.to_string())
            .or_insert(CachedImage { content_type, bytes })
            .clone();
        log::debug!("{}", self.resource_service.render("image_cache_size_debug_message_template", &json!({ "count": images.len() })));
        Ok(cached_image)
    }

    fn is_image_content_type(content_type: Option<&str>) -> bool {
        match content_type {
            Some(content_type) => content_type.trim().to_ascii_lowercase().starts_with("image/"),
            None => false
        }
    }
}
