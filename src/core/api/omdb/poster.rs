use bytes::Bytes;

use super::*;

/// A poster image fetched from the OMDb image endpoint
#[derive(Debug, Clone)]
pub struct ImageRef {
    /// The final url the image was served from
    pub url: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl OmdbClient {
    /// Looks up the poster of an episode by its IMDb identifier
    pub async fn fetch_episode_poster(&self, episode_id: &str) -> Result<ImageRef, ApiError> {
        let response = self.get_image(&[("i", episode_id)]).await?;

        let url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let bytes = response.bytes().await.map_err(ApiError::Network)?;

        Ok(ImageRef {
            url,
            content_type,
            bytes,
        })
    }
}
