use crate::{
    clients::traits::ImageSearcher,
    config::PexelsConfig,
    error::{Result, SuggestionError},
    models::ImageSearchResponse,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

#[derive(Clone)]
pub struct PexelsImageClient {
    client: Client,
    endpoint: String,
    api_key: String,
    per_page: u32,
}

impl PexelsImageClient {
    pub fn new(config: PexelsConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| SuggestionError::ConfigError("Pexels API key is required".into()))?;

        Ok(Self {
            client: Client::new(),
            endpoint: config.endpoint,
            api_key,
            per_page: config.per_page,
        })
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }
}

#[async_trait]
impl ImageSearcher for PexelsImageClient {
    async fn search_images(&self, keyword: &str) -> Result<Vec<String>> {
        let per_page = self.per_page.to_string();
        log::debug!("Searching Pexels for '{}' ({} per page)", keyword, per_page);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("query", keyword), ("per_page", per_page.as_str())])
            .header(reqwest::header::AUTHORIZATION, self.api_key.as_str())
            .send()
            .await
            .map_err(|e| SuggestionError::TransportError(format!("Pexels request failed: {}", e)))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SuggestionError::TransportError(format!("failed to read Pexels response: {}", e))
        })?;

        if status != StatusCode::OK {
            return Err(SuggestionError::UnexpectedStatus {
                service: "Pexels",
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ImageSearchResponse = serde_json::from_str(&body).map_err(|e| {
            SuggestionError::EncodingError(format!("failed to decode Pexels response: {}", e))
        })?;

        Ok(parsed.medium_urls())
    }
}
