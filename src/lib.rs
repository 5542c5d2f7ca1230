pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod server;
pub mod suggestions;

pub use clients::{
    GeminiKeywordClient, ImageSearcher, KeywordExtractor, PexelsImageClient, UpstreamClients,
};
pub use config::{Config, GeminiConfig, PexelsConfig, ServerConfig};
pub use error::{Result, SuggestionError};
pub use models::{
    ImageSearchResponse, KeywordRequest, KeywordResponse, SuggestionQuery, SuggestionSet,
};
pub use suggestions::SuggestionService;
