//! Two phase fetching of a season, first the season lookup then a plot lookup
//! per episode
//!
//! [`ViewState::update`] decides which fetches to start, [`perform`] runs a
//! single one against the metadata service and [`Coordinator`] ties both
//! together when there's no GUI event loop to do it, i.e. for the command line.

use tokio::sync::mpsc;
use tracing::debug;

use crate::core::api::omdb::season::SeasonPayload;
use crate::core::api::omdb::OmdbClient;
use crate::core::view_state::{Intent, Query, ViewState};

/// A request the state wants to be made
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Season { generation: u64, query: Query },
    Plot { generation: u64, episode_id: String },
}

/// The outcome of a [`Fetch`], errors are kept as text to stay cloneable
#[derive(Debug, Clone)]
pub enum Completion {
    SeasonLoaded {
        generation: u64,
        result: Result<SeasonPayload, String>,
    },
    PlotLoaded {
        generation: u64,
        episode_id: String,
        result: Result<String, String>,
    },
}

/// Runs the fetch against the metadata service
pub async fn perform(client: OmdbClient, fetch: Fetch) -> Completion {
    match fetch {
        Fetch::Season { generation, query } => {
            let result = client
                .fetch_season(&query.title, query.season_number)
                .await
                .map_err(|err| err.to_string());

            Completion::SeasonLoaded { generation, result }
        }
        Fetch::Plot {
            generation,
            episode_id,
        } => {
            let result = client
                .fetch_episode(&episode_id)
                .await
                .map(|detail| detail.plot_text())
                .map_err(|err| err.to_string());

            Completion::PlotLoaded {
                generation,
                episode_id,
                result,
            }
        }
    }
}

/// Drives a [`ViewState`] outside of the GUI
///
/// Fetches are spawned onto the current tokio runtime and all of their
/// completions are sent back through a single channel, so the state is only
/// ever touched by whoever owns the coordinator.
pub struct Coordinator {
    state: ViewState,
    client: OmdbClient,
    sender: mpsc::UnboundedSender<Completion>,
    receiver: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl Coordinator {
    pub fn new(client: OmdbClient, state: ViewState) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            state,
            client,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    /// Number of fetches started but not applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Applies a user intent, starting whatever fetches it calls for
    pub fn dispatch(&mut self, intent: Intent) {
        let fetches = self.state.update(intent);
        self.spawn_fetches(fetches);
    }

    /// Waits for the next fetch to complete and applies it
    ///
    /// Returns `false` when nothing is in flight.
    pub async fn apply_next(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }

        // The coordinator keeps a sender alive so the channel can't close
        let Some(completion) = self.receiver.recv().await else {
            return false;
        };

        self.in_flight -= 1;
        let fetches = self.state.update(completion);
        self.spawn_fetches(fetches);
        true
    }

    /// Applies completions until no fetch is in flight
    pub async fn settle(&mut self) {
        while self.apply_next().await {}
    }

    fn spawn_fetches(&mut self, fetches: Vec<Fetch>) {
        for fetch in fetches {
            debug!("starting {:?}", fetch);

            self.in_flight += 1;
            let client = self.client.clone();
            let sender = self.sender.clone();

            tokio::spawn(async move {
                let completion = perform(client, fetch).await;
                // Only fails when the coordinator is gone, nobody is left to care
                let _ = sender.send(completion);
            });
        }
    }
}
