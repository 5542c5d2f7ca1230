use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoSource {
    #[serde(default)]
    pub medium: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub src: PhotoSource,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageSearchResponse {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl ImageSearchResponse {
    pub fn medium_urls(self) -> Vec<String> {
        self.photos.into_iter().map(|photo| photo.src.medium).collect()
    }
}
