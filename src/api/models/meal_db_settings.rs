use std::time::Duration;
use reqwest::Url;

pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";
pub const DEFAULT_VIDEO_OEMBED_URL: &str = "https://www.youtube.com/oembed";
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_IMAGE_HOST: &str = "themealdb.com";

#[derive(Clone, Debug, PartialEq)]
pub struct MealDbSettings {
    pub base_url: String,
    /// Host (and its subdomains) the image proxy may fetch from over https.
    pub image_host: String,
    pub video_oembed_url: String,
    pub request_timeout: Duration
}

impl Default for MealDbSettings {
    fn default() -> Self {
        MealDbSettings {
            base_url: DEFAULT_BASE_URL.to_string(),
            image_host: DEFAULT_IMAGE_HOST.to_string(),
            video_oembed_url: DEFAULT_VIDEO_OEMBED_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECONDS)
        }
    }
}

impl MealDbSettings {
    /// Builds settings from a variable lookup, falling back to defaults for anything unset or malformed.
    pub fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        let defaults = MealDbSettings::default();
        let request_timeout = match var("REQUEST_TIMEOUT_SECONDS") {
            Some(seconds) => match seconds.trim().parse::<u64>() {
                Ok(seconds) if seconds > 0 => Duration::from_secs(seconds),
                _ => {
                    log::warn!("Ignoring REQUEST_TIMEOUT_SECONDS=\"{}\"; using {} seconds", seconds, DEFAULT_REQUEST_TIMEOUT_SECONDS);
                    defaults.request_timeout
                }
            },
            None => defaults.request_timeout
        };
        let base_url = var("MEALDB_BASE_URL").filter(|url| !url.trim().is_empty()).unwrap_or(defaults.base_url);
        let image_host = var("MEALDB_IMAGE_HOST")
            .map(|host| host.trim().to_ascii_lowercase())
            .filter(|host| !host.is_empty())
            .or_else(|| Url::parse(&base_url).ok().and_then(|url| url.host_str().map(|host| host.to_ascii_lowercase())))
            .unwrap_or(defaults.image_host);
        MealDbSettings {
            base_url,
            image_host,
            video_oembed_url: var("VIDEO_OEMBED_URL").filter(|url| !url.trim().is_empty()).unwrap_or(defaults.video_oembed_url),
            request_timeout
        }
    }

    pub fn from_env() -> Self {
        MealDbSettings::from_vars(|name| dotenv::var(name).ok())
    }

    /// Only https urls on the image host or one of its subdomains may be proxied.
    pub fn image_url_is_allowed(&self, url: &str) -> bool {
        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(_) => return false
        };
        if url.scheme() != "https" || self.image_host.is_empty() {
            return false;
        }
        match url.host_str() {
            Some(host) => {
                let host = host.to_ascii_lowercase();
                host == self.image_host || host.ends_with(&format!(".{}", self.image_host))
            }
            None => false
        }
    }
}
