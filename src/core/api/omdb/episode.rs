use serde::{Deserialize, Serialize};

use super::*;

/// Full details of a single episode according to OMDb
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct EpisodeDetail {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Season")]
    pub season: Option<String>,
    #[serde(rename = "Episode")]
    pub episode: Option<String>,
    #[serde(rename = "Released")]
    pub released: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Plot")]
    pub plot: Option<String>,
    #[serde(rename = "Poster")]
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "seriesID")]
    pub series_id: Option<String>,
}

impl EpisodeDetail {
    /// The short plot, empty when OMDb has none
    pub fn plot_text(&self) -> String {
        match self.plot.as_deref() {
            Some(plot) if plot != "N/A" => plot.to_owned(),
            _ => String::new(),
        }
    }
}

impl OmdbClient {
    /// Looks up one episode by its IMDb identifier, asking for the short plot
    pub async fn fetch_episode(&self, episode_id: &str) -> Result<EpisodeDetail, ApiError> {
        let prettified_json = self
            .get_pretty_json(&[("i", episode_id), ("plot", "short"), ("r", "json")])
            .await?;

        deserialize_json(&prettified_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_placeholder_becomes_empty() {
        let detail = EpisodeDetail {
            plot: Some("N/A".to_owned()),
            ..Default::default()
        };
        assert_eq!(detail.plot_text(), "");

        let detail = EpisodeDetail::default();
        assert_eq!(detail.plot_text(), "");
    }

    #[test]
    fn episode_lookup_body_is_deserialized() {
        let json = r#"{
            "Title": "Minimum Viable Product",
            "Released": "06 Apr 2014",
            "Season": "1",
            "Episode": "1",
            "Runtime": "30 min",
            "Plot": "Richard works on a music app.",
            "imdbRating": "8.0",
            "imdbID": "tt3222784",
            "seriesID": "tt2575988",
            "Type": "episode",
            "Response": "True"
        }"#;

        let detail: EpisodeDetail = deserialize_json(json).unwrap();
        assert_eq!(detail.plot_text(), "Richard works on a music app.");
        assert_eq!(detail.series_id.as_deref(), Some("tt2575988"));
    }
}
