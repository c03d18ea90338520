use crate::client::traits::Scraper;
use crate::config::AppConfig;
use crate::model::{ScrapeRequest, ScraperError};

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub struct ScraperImpl {
    client: Client,
    community_base_url: String,
    store_base_url: String,
    store_filter: String,
}

impl ScraperImpl {
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ScraperError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            community_base_url: base_url(&config.community_base_url),
            store_base_url: base_url(&config.store_base_url),
            store_filter: config.store_filter.clone(),
        })
    }

    fn build_url(&self, req: &ScrapeRequest) -> String {
        match req {
            ScrapeRequest::Profile { profile_id } => {
                let kind = profile_path(profile_id);
                format!(
                    "{}/{}/{}/games?xml=1",
                    self.community_base_url, kind, profile_id
                )
            }
            ScrapeRequest::ListingPage { page: None } => format!(
                "{}/search/?filter={}",
                self.store_base_url, self.store_filter
            ),
            ScrapeRequest::ListingPage { page: Some(page) } => format!(
                "{}/search/?filter={}&page={}",
                self.store_base_url, self.store_filter, page
            ),
            ScrapeRequest::AppDetails { app_id } => {
                format!("{}/app/{}", self.store_base_url, app_id)
            }
        }
    }
}

fn base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// SteamID64 values are 17 decimal digits; anything else is a vanity name.
fn is_steam_id64(profile_id: &str) -> bool {
    profile_id.len() == 17 && profile_id.bytes().all(|b| b.is_ascii_digit())
}

fn profile_path(profile_id: &str) -> &'static str {
    if is_steam_id64(profile_id) {
        "profiles"
    } else {
        "id"
    }
}

fn send_error(e: reqwest::Error) -> ScraperError {
    if e.is_timeout() {
        ScraperError::Timeout
    } else {
        ScraperError::HttpError(e.to_string())
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, req: &ScrapeRequest) -> Result<String, ScraperError> {
        let url = self.build_url(req);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(send_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::InvalidResponse(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ScraperError::HttpError(e.to_string()))
    }
}
