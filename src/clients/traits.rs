use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    /// Ordered keywords derived from a trivia question title.
    async fn extract_keywords(&self, title: &str) -> Result<Vec<String>>;
}

#[async_trait]
pub trait ImageSearcher: Send + Sync {
    /// Medium-size image URLs for a single keyword, in upstream order.
    async fn search_images(&self, keyword: &str) -> Result<Vec<String>>;
}
