//! The state the user interface renders from, and the one place it is mutated
//!
//! Every user intent and every fetch completion goes through [`ViewState::update`],
//! which applies it against the current state and hands back the fetches that
//! should be started next. Completions are applied one at a time, so merges never
//! interleave with each other.

use tracing::{debug, error, info, warn};

use crate::core::enrichment::{Completion, Fetch};
use crate::core::search_result::{SearchResult, SeasonOption};

pub const DEFAULT_TITLE: &str = "Silicon Valley";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub title: String,
    pub season_number: u32,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            season_number: 1,
        }
    }
}

/// What the user asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ChangeSearchTerm(String),
    ChangeSeason(u32),
    TriggerSearch,
    DeleteEpisode(String),
}

#[derive(Debug, Clone)]
pub enum Message {
    Intent(Intent),
    Completion(Completion),
}

impl From<Intent> for Message {
    fn from(intent: Intent) -> Self {
        Self::Intent(intent)
    }
}

impl From<Completion> for Message {
    fn from(completion: Completion) -> Self {
        Self::Completion(completion)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub query: Query,
    pub result: SearchResult,
    pub loading: bool,
    /// Bumped by every dispatched search
    generation: u64,
    /// Generation of the search whose season is in `result`, plots are merged only
    /// when they were fetched for it
    result_generation: u64,
}

impl ViewState {
    pub fn new(query: Query) -> Self {
        Self {
            query,
            ..Default::default()
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn result_generation(&self) -> u64 {
        self.result_generation
    }

    /// Season choices of the currently loaded result
    pub fn season_options(&self) -> Vec<SeasonOption> {
        self.result.season_options()
    }

    pub fn update(&mut self, message: impl Into<Message>) -> Vec<Fetch> {
        match message.into() {
            Message::Intent(intent) => self.handle_intent(intent),
            Message::Completion(completion) => self.apply_completion(completion),
        }
    }

    fn handle_intent(&mut self, intent: Intent) -> Vec<Fetch> {
        match intent {
            Intent::ChangeSearchTerm(term) => {
                self.query.title = term;
                vec![]
            }
            Intent::ChangeSeason(season_number) => {
                self.query.season_number = season_number;
                vec![]
            }
            Intent::TriggerSearch => self.search(),
            Intent::DeleteEpisode(episode_id) => {
                self.result.delete_episode(&episode_id);
                vec![]
            }
        }
    }

    fn search(&mut self) -> Vec<Fetch> {
        if self.query.title.trim().is_empty() {
            debug!("ignoring search with an empty title");
            return vec![];
        }

        if self.loading {
            debug!("ignoring search while another one is in flight");
            return vec![];
        }

        self.loading = true;
        self.generation += 1;

        vec![Fetch::Season {
            generation: self.generation,
            query: self.query.clone(),
        }]
    }

    fn apply_completion(&mut self, completion: Completion) -> Vec<Fetch> {
        match completion {
            Completion::SeasonLoaded { generation, result } => {
                if generation != self.generation {
                    debug!("discarding season of superseded search {}", generation);
                    return vec![];
                }

                self.loading = false;

                match result {
                    Ok(payload) => {
                        self.result = SearchResult::from(payload);
                        self.result_generation = generation;
                        info!(
                            "loaded {} episodes of '{}'",
                            self.result.episodes.len(),
                            self.result.show_title.as_deref().unwrap_or_default()
                        );
                        self.enrichment_fetches()
                    }
                    Err(err) => {
                        error!("error searching: {}", err);
                        vec![]
                    }
                }
            }
            Completion::PlotLoaded {
                generation,
                episode_id,
                result,
            } => {
                if generation != self.result_generation {
                    debug!(
                        "discarding plot of episode {} fetched for replaced result {}",
                        episode_id, generation
                    );
                    return vec![];
                }

                match result {
                    Ok(plot) => {
                        if !self.result.set_plot(&episode_id, plot) {
                            debug!("episode {} was deleted before its plot arrived", episode_id);
                        }
                    }
                    Err(err) => warn!("error fetching plot of episode {}: {}", episode_id, err),
                }
                vec![]
            }
        }
    }

    /// One plot fetch for every episode present right now
    fn enrichment_fetches(&self) -> Vec<Fetch> {
        self.result
            .episodes
            .iter()
            .map(|episode| Fetch::Plot {
                generation: self.result_generation,
                episode_id: episode.id.clone(),
            })
            .collect()
    }
}
