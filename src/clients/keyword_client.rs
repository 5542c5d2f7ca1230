use crate::{
    clients::traits::KeywordExtractor,
    config::GeminiConfig,
    error::{Result, SuggestionError},
    models::{KeywordRequest, KeywordResponse},
};
use async_trait::async_trait;
use reqwest::Client;

/// Prompt asking the model for three comma-separated English keywords.
pub fn build_keyword_prompt(title: &str) -> String {
    format!(
        "Extract exactly 3 relevant keywords for an image search from the following trivia question. \
         Answer only with the keywords separated by commas, in English. Question: '{}'",
        title
    )
}

/// Splits the model reply on commas. Count and content are left unchecked.
pub fn parse_keywords(text: &str) -> Vec<String> {
    text.split(',').map(|keyword| keyword.trim().to_string()).collect()
}

#[derive(Clone)]
pub struct GeminiKeywordClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiKeywordClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .ok_or_else(|| SuggestionError::ConfigError("Gemini API key is required".into()))?;

        Ok(Self {
            client: Client::new(),
            endpoint: config.endpoint,
            api_key,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl KeywordExtractor for GeminiKeywordClient {
    async fn extract_keywords(&self, title: &str) -> Result<Vec<String>> {
        let request = KeywordRequest::from_prompt(build_keyword_prompt(title));
        let request_json = serde_json::to_string(&request).map_err(|e| {
            SuggestionError::EncodingError(format!("failed to encode Gemini request: {}", e))
        })?;

        log::debug!("Gemini request payload: {}", request_json);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(request_json)
            .send()
            .await
            .map_err(|e| {
                SuggestionError::TransportError(format!("Gemini request failed: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            SuggestionError::TransportError(format!("failed to read Gemini response: {}", e))
        })?;

        if !status.is_success() {
            log::warn!("Gemini answered with status {}", status);
        }

        let parsed: KeywordResponse = serde_json::from_str(&body).map_err(|e| {
            SuggestionError::EncodingError(format!("failed to decode Gemini response: {}", e))
        })?;

        parsed
            .first_text()
            .map(parse_keywords)
            .ok_or_else(|| SuggestionError::EmptyResultError("no keywords received from Gemini".into()))
    }
}
