pub mod image_client;
pub mod keyword_client;
pub mod traits;

use crate::{config::Config, error::Result};
use std::sync::Arc;

pub use image_client::PexelsImageClient;
pub use keyword_client::GeminiKeywordClient;
pub use traits::{ImageSearcher, KeywordExtractor};

/// The two upstream clients the suggestion flow depends on.
#[derive(Clone)]
pub struct UpstreamClients {
    keyword_client: Arc<dyn KeywordExtractor>,
    image_client: Arc<dyn ImageSearcher>,
}

impl UpstreamClients {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            keyword_client: Arc::new(GeminiKeywordClient::new(config.gemini.clone())?),
            image_client: Arc::new(PexelsImageClient::new(config.pexels.clone())?),
        })
    }

    /// Substitute implementations, mostly for tests.
    pub fn with_clients(
        keyword_client: Arc<dyn KeywordExtractor>,
        image_client: Arc<dyn ImageSearcher>,
    ) -> Self {
        Self {
            keyword_client,
            image_client,
        }
    }

    pub fn keywords(&self) -> &Arc<dyn KeywordExtractor> {
        &self.keyword_client
    }

    pub fn images(&self) -> &Arc<dyn ImageSearcher> {
        &self.image_client
    }
}
