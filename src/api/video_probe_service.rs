use reqwest::{ Client, StatusCode, Url };
use serde_json::json;
use crate::api::models::MealDbSettings;
use crate::api::ResourceService;

#[derive(Clone)]
pub struct VideoProbeService {
    resource_service: ResourceService,
    client: Client,
    oembed_url: String
}

impl VideoProbeService {
    pub fn new(resource_service: ResourceService, client: Client, settings: &MealDbSettings) -> VideoProbeService {
        VideoProbeService {
            resource_service,
            client,
            oembed_url: settings.video_oembed_url.clone()
        }
    }

    pub fn oembed_request_url(&self, video_url: &str) -> Option<Url> {
        let video_url = video_url.trim();
        if video_url.is_empty() || Url::parse(video_url).is_err() {
            return None;
        }
        let mut url = Url::parse(&self.oembed_url).ok()?;
        url.query_pairs_mut()
            .append_pair("url", video_url)
            .append_pair("format", "json");
        Some(url)
    }

    /// True only when the oEmbed endpoint answers 200 for the video.
    pub async fn is_available(&self, video_url: &str) -> bool {
        let request_url = match self.oembed_request_url(video_url) {
            Some(request_url) => request_url,
            None => {
                self.log_unavailable(video_url, "malformed url");
                return false;
            }
        };
        log::debug!("{}", self.resource_service.render("probing_video_debug_message_template", &json!({ "url": video_url })));
        match self.client.get(request_url).send().await {
            Ok(response) if response.status() == StatusCode::OK => true,
            Ok(response) => {
                self.log_unavailable(video_url, response.status().as_str());
                false
            }
            Err(error) => {
                self.log_unavailable(video_url, &error.to_string());
                false
            }
        }
    }

    fn log_unavailable(&self, video_url: &str, reason: &str) {
        let message_data = &json!({ "url": video_url, "reason": reason });
        log::info!("{}", self.resource_service.render("video_unavailable_info_message_template", message_data));
    }
}
