use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestionQuery {
    pub title: Option<String>,
}

impl SuggestionQuery {
    /// First `title` pair wins; later duplicates are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let title = pairs
            .into_iter()
            .find(|(key, _)| key == "title")
            .map(|(_, value)| value);
        Self { title }
    }
}

/// Unique image URLs gathered across every keyword of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSet {
    urls: HashSet<String>,
}

impl SuggestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I>(&mut self, urls: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.urls.extend(urls);
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.urls.into_iter().collect()
    }
}
