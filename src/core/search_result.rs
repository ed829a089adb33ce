//! The in-memory model of the last fetched season
//!
//! Episodes arrive from the season lookup without a plot, the plot of each one is
//! filled in later and independently by the enrichment phase.

use chrono::NaiveDate;
use num2words::Num2Words;
use tracing::warn;

use crate::core::api::omdb::season::{EpisodeStub, SeasonPayload};

/// Ratings at or above this are considered highlights of a season
pub const HIGH_RATING: f64 = 8.5;

const IMDB_TITLE_ADDRESS: &str = "https://www.imdb.com/title/EPISODE-ID/";

/// Date formats OMDb uses, season lookups give the first and episode lookups the second
const RELEASE_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d %b %Y"];

#[derive(Debug, Clone, PartialEq)]
pub enum Rating {
    Score(f64),
    /// Anything that is not a number, OMDb sends "N/A" for unrated episodes
    Unrated(String),
}

impl Rating {
    pub fn parse(rating: &str) -> Self {
        match rating.trim().parse::<f64>() {
            Ok(score) if score.is_finite() => Self::Score(score),
            _ => Self::Unrated(rating.to_owned()),
        }
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            Rating::Score(score) => Some(*score),
            Rating::Unrated(_) => None,
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rating::Score(score) => write!(f, "{:.1}", score),
            Rating::Unrated(text) => write!(f, "{}", text),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub id: String,
    pub episode_number: u32,
    pub title: String,
    /// `None` until the episode has been enriched
    pub plot: Option<String>,
    /// The release date exactly as received
    pub release_date: String,
    pub rating: Rating,
}

impl Episode {
    pub fn is_highly_rated(&self) -> bool {
        self.rating
            .score()
            .map(|score| score >= HIGH_RATING)
            .unwrap_or(false)
    }

    pub fn imdb_url(&self) -> String {
        IMDB_TITLE_ADDRESS.replace("EPISODE-ID", &self.id)
    }

    pub fn released_month(&self) -> String {
        released_month_label(&self.release_date)
    }
}

impl From<EpisodeStub> for Episode {
    fn from(stub: EpisodeStub) -> Self {
        Self {
            episode_number: stub.episode.trim().parse().unwrap_or(0),
            rating: Rating::parse(&stub.imdb_rating),
            id: stub.imdb_id,
            title: stub.title,
            plot: None,
            release_date: stub.released,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub show_title: Option<String>,
    pub total_seasons: u32,
    pub episodes: Vec<Episode>,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            show_title: None,
            total_seasons: 1,
            episodes: vec![],
        }
    }
}

impl From<SeasonPayload> for SearchResult {
    fn from(payload: SeasonPayload) -> Self {
        let total_seasons = payload
            .total_seasons
            .and_then(|total| total.trim().parse::<u32>().ok())
            .filter(|total| *total > 0)
            .unwrap_or(1);

        Self {
            show_title: payload.title,
            total_seasons,
            episodes: payload.episodes.into_iter().map(Episode::from).collect(),
        }
    }
}

impl SearchResult {
    /// Removes the episode with the given id, nothing happens when it is absent
    pub fn delete_episode(&mut self, episode_id: &str) {
        self.episodes = delete_episode(std::mem::take(&mut self.episodes), episode_id);
    }

    /// Sets the plot of the episode with the given id
    ///
    /// Returns `false` when no such episode exists anymore, i.e. it was deleted
    /// while its plot was being fetched.
    pub fn set_plot(&mut self, episode_id: &str, plot: String) -> bool {
        match self
            .episodes
            .iter_mut()
            .find(|episode| episode.id == episode_id)
        {
            Some(episode) => {
                episode.plot = Some(plot);
                true
            }
            None => false,
        }
    }

    pub fn average_rating(&self) -> AverageRating {
        average_rating(&self.episodes)
    }

    pub fn season_options(&self) -> Vec<SeasonOption> {
        season_options(self.total_seasons)
    }
}

pub fn delete_episode(episodes: Vec<Episode>, episode_id: &str) -> Vec<Episode> {
    episodes
        .into_iter()
        .filter(|episode| episode.id != episode_id)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AverageRating {
    NoEpisodes,
    /// There are episodes but none of them has a numeric rating
    Unrated,
    Rated(f64),
}

impl std::fmt::Display for AverageRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AverageRating::NoEpisodes => write!(f, "0"),
            AverageRating::Unrated => write!(f, "N/A"),
            AverageRating::Rated(average) => write!(f, "{:.2}", average),
        }
    }
}

/// The mean rating of the given episodes rounded to two decimal places
///
/// Episodes without a numeric rating are left out of the mean.
pub fn average_rating(episodes: &[Episode]) -> AverageRating {
    if episodes.is_empty() {
        return AverageRating::NoEpisodes;
    }

    let scores: Vec<f64> = episodes
        .iter()
        .filter_map(|episode| episode.rating.score())
        .collect();

    if scores.is_empty() {
        return AverageRating::Unrated;
    }

    let average = scores.iter().sum::<f64>() / scores.len() as f64;
    AverageRating::Rated((average * 100.0).round() / 100.0)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonOption {
    pub label: String,
    pub value: u32,
}

impl std::fmt::Display for SeasonOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Selectable seasons `1..=total_seasons` labelled with their ordinal words
pub fn season_options(total_seasons: u32) -> Vec<SeasonOption> {
    (1..=total_seasons.max(1))
        .map(|value| SeasonOption {
            label: ordinal_words(value),
            value,
        })
        .collect()
}

/// The full month name of the given date, or the input unchanged when it is not a date
pub fn released_month_label(date: &str) -> String {
    RELEASE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date.trim(), format).ok())
        .map(|date| date.format("%B").to_string())
        .unwrap_or_else(|| date.to_owned())
}

/// Spells out a number as an ordinal, 21 becomes "twenty-first"
pub fn ordinal_words(number: u32) -> String {
    Num2Words::new(i64::from(number))
        .ordinal()
        .to_words()
        .unwrap_or_else(|err| {
            warn!("failed to spell out {}: {:?}", number, err);
            number.to_string()
        })
}
