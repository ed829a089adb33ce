use serde::{Deserialize, Serialize};

use super::*;

/// A season of a show as returned by the OMDb title lookup
///
/// Numbers are kept as the strings OMDb sends ("1", "8.0", "N/A"), turning
/// them into proper values is left to [`crate::core::search_result`].
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SeasonPayload {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Season")]
    pub season: Option<String>,
    #[serde(rename = "totalSeasons")]
    pub total_seasons: Option<String>,
    #[serde(rename = "Episodes", default)]
    pub episodes: Vec<EpisodeStub>,
}

/// An episode listed in a season lookup, it comes without a plot
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EpisodeStub {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Episode", default)]
    pub episode: String,
    #[serde(rename = "Released", default)]
    pub released: String,
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: String,
}

impl OmdbClient {
    /// Looks up a season of the show best matching the given title
    pub async fn fetch_season(
        &self,
        title: &str,
        season_number: u32,
    ) -> Result<SeasonPayload, ApiError> {
        let season_number = season_number.to_string();

        let prettified_json = self
            .get_pretty_json(&[("t", title), ("Season", season_number.as_str())])
            .await?;

        deserialize_json(&prettified_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_lookup_body_is_deserialized() {
        let json = r#"{
            "Title": "Silicon Valley",
            "Season": "1",
            "totalSeasons": "6",
            "Episodes": [
                {"Title": "Minimum Viable Product", "Released": "2014-04-06", "Episode": "1", "imdbRating": "8.0", "imdbID": "tt3222784"},
                {"Title": "The Cap Table", "Released": "2014-04-13", "Episode": "2", "imdbRating": "N/A", "imdbID": "tt3631006"}
            ],
            "Response": "True"
        }"#;

        let payload: SeasonPayload = deserialize_json(json).unwrap();

        assert_eq!(payload.title.as_deref(), Some("Silicon Valley"));
        assert_eq!(payload.total_seasons.as_deref(), Some("6"));
        assert_eq!(payload.episodes.len(), 2);
        assert_eq!(payload.episodes[1].imdb_id, "tt3631006");
        assert_eq!(payload.episodes[1].imdb_rating, "N/A");
    }

    #[test]
    fn season_without_episodes_field_has_no_episodes() {
        let json = r#"{"Title": "Silicon Valley", "totalSeasons": "6", "Response": "True"}"#;

        let payload: SeasonPayload = deserialize_json(json).unwrap();
        assert!(payload.episodes.is_empty());
    }
}
