use crate::{
    clients::{ImageSearcher, UpstreamClients},
    error::{Result, SuggestionError},
    models::SuggestionSet,
};
use futures::stream::{self, StreamExt};

/// Turns a trivia title into a set of unique image URLs.
///
/// Keyword extraction is fail-fast: its error ends the request. Image
/// searches are best-effort: a failing keyword is logged and skipped, and
/// the remaining keywords still contribute their URLs.
#[derive(Clone)]
pub struct SuggestionService {
    clients: UpstreamClients,
}

impl SuggestionService {
    pub fn new(clients: UpstreamClients) -> Self {
        Self { clients }
    }

    pub async fn suggest(&self, title: &str) -> Result<SuggestionSet> {
        if title.is_empty() {
            return Err(SuggestionError::ValidationError(
                "The 'title' parameter is required".into(),
            ));
        }

        log::info!("Fetching keywords for: {}", title);
        let keywords = self.clients.keywords().extract_keywords(title).await?;
        log::info!("Keywords received: {:?}", keywords);

        let images: &dyn ImageSearcher = self.clients.images().as_ref();
        let suggestions = stream::iter(keywords)
            .fold(SuggestionSet::new(), |mut set, keyword| async move {
                match images.search_images(&keyword).await {
                    Ok(urls) => set.extend(urls),
                    Err(e) => {
                        log::error!("Image search failed for keyword '{}': {}", keyword, e)
                    }
                }
                set
            })
            .await;

        log::info!("Found {} unique images", suggestions.len());
        Ok(suggestions)
    }
}
