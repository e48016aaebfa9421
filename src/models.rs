use serde::Deserialize;

/// One photo from the Unsplash API. Only the fields the page needs
/// are kept; everything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub urls: PhotoUrls,
    pub alt_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoUrls {
    pub regular: String,
}

/// Response shape of `GET /search/photos`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub total: u64,
    pub results: Vec<Photo>,
}
