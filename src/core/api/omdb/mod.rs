use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::core::settings_config::ApiSettings;

pub mod episode;
pub mod poster;
pub mod season;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error during request")]
    Network(reqwest::Error),
    #[error("omdb api error when deserializing json: unexpected '{0}'")]
    Deserialization(String, serde_json::Error),
    #[error("omdb rejected the lookup: {0}")]
    BadResponse(String),
}

/// The body OMDb answers with (still under a 200 status) when a lookup fails
#[derive(Debug, Deserialize, Clone)]
struct BadResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: String,
}

/// A client for the OMDb metadata service
///
/// Cloning is cheap, the underlying connection pool is shared between clones.
#[derive(Debug, Clone)]
pub struct OmdbClient {
    http: reqwest::Client,
    api_url: String,
    image_api_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(settings: &ApiSettings) -> Self {
        Self::with_endpoints(
            settings.api_url.clone(),
            settings.image_api_url.clone(),
            settings.api_key.clone(),
        )
    }

    pub fn with_endpoints(api_url: String, image_api_url: String, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url,
            image_api_url,
            api_key,
        }
    }

    /// Requests the data endpoint and returns the prettified json body
    async fn get_pretty_json(&self, query: &[(&str, &str)]) -> Result<String, ApiError> {
        debug!("requesting {} with {:?}", self.api_url, query);

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Network)?;

        let text = response.text().await.map_err(ApiError::Network)?;

        // Prettifying so that deserialization errors can point at a single line
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(value) => Ok(serde_json::to_string_pretty(&value).unwrap_or(text)),
            Err(err) => Err(ApiError::Deserialization(text, err)),
        }
    }

    /// Requests the image endpoint and returns the raw response
    async fn get_image(&self, query: &[(&str, &str)]) -> Result<reqwest::Response, ApiError> {
        debug!("requesting {} with {:?}", self.image_api_url, query);

        self.http
            .get(&self.image_api_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(ApiError::Network)
    }
}

fn try_bad_response(json_string: &str) -> Option<String> {
    serde_json::from_str::<BadResponse>(json_string)
        .ok()
        .filter(|bad_response| bad_response.response.eq_ignore_ascii_case("false"))
        .map(|bad_response| bad_response.error)
}

pub fn deserialize_json<'a, T: serde::Deserialize<'a>>(
    prettified_json: &'a str,
) -> Result<T, ApiError> {
    if let Some(message) = try_bad_response(prettified_json) {
        return Err(ApiError::BadResponse(message));
    }

    serde_json::from_str::<T>(prettified_json).map_err(|err| {
        let errored_line = prettified_json
            .lines()
            .nth(err.line().saturating_sub(1))
            .unwrap_or_default()
            .to_owned();
        ApiError::Deserialization(errored_line, err)
    })
}
