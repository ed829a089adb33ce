//! Command-line arguments and the headless commands

pub mod handle_cli {
    //! Handlers for command-line argument parsing

    use std::path::Path;

    use anyhow::{bail, Context};

    use crate::core::api::omdb::OmdbClient;
    use crate::core::enrichment::Coordinator;
    use crate::core::settings_config::{self, Config};
    use crate::core::view_state::{Intent, Query, ViewState};

    use super::cli_data::*;

    /// Handles all the logic for the command line arguments
    pub async fn handle_cli(command: Command, config: &Config) -> anyhow::Result<()> {
        match command {
            Command::Search { title, season } => search(config, title, season).await,
            Command::Poster {
                episode_id,
                output,
            } => save_poster(config, &episode_id, &output).await,
            Command::Config { init } => show_config(config, init),
        }
    }

    async fn search(config: &Config, title: String, season: u32) -> anyhow::Result<()> {
        let client = OmdbClient::new(&config.api);
        let query = Query {
            title,
            season_number: season,
        };

        let mut coordinator = Coordinator::new(client, ViewState::new(query));
        coordinator.dispatch(Intent::TriggerSearch);
        coordinator.settle().await;

        let state = coordinator.into_state();
        if state.result.show_title.is_none() {
            bail!("no season found for '{}'", state.query.title);
        }

        print!("{}", render(&state));
        Ok(())
    }

    async fn save_poster(config: &Config, episode_id: &str, output: &Path) -> anyhow::Result<()> {
        let client = OmdbClient::new(&config.api);

        let poster = client
            .fetch_episode_poster(episode_id)
            .await
            .with_context(|| format!("failed to fetch the poster of {}", episode_id))?;

        tokio::fs::write(output, &poster.bytes)
            .await
            .with_context(|| format!("failed to write poster to {}", output.display()))?;

        println!("poster saved to {}", output.display());
        Ok(())
    }

    fn show_config(config: &Config, init: bool) -> anyhow::Result<()> {
        let Some(config_path) = settings_config::get_config_file_path() else {
            bail!("could not determine the config directory");
        };

        if init {
            if config_path.exists() {
                bail!("config file {} already exists", config_path.display());
            }
            config.save_to(&config_path)?;
            println!("config written to {}", config_path.display());
        } else {
            println!("{}", config_path.display());
        }
        Ok(())
    }

    /// Plain text rendering of the summary row and the episode table
    pub fn render(state: &ViewState) -> String {
        let mut out = format!(
            "Show Name: {}    Average Rating: {}\n\n",
            state.result.show_title.as_deref().unwrap_or_default(),
            state.result.average_rating()
        );

        if state.result.episodes.is_empty() {
            out.push_str("No results found\n");
            return out;
        }

        for episode in &state.result.episodes {
            let marker = if episode.is_highly_rated() { "*" } else { " " };
            out.push_str(&format!(
                "{}{:>3}  {:<40}  {:<10}  {:>4}  {}\n",
                marker,
                episode.episode_number,
                episode.title,
                episode.released_month(),
                episode.rating,
                episode.plot.as_deref().unwrap_or_default()
            ));
        }
        out
    }

}

pub mod cli_data {
    //! Data structures for command-line argument parsing

    use clap::{Parser, Subcommand};
    use std::path;

    #[derive(Parser)]
    #[command(author, version, about)]
    pub struct Cli {
        #[clap(subcommand)]
        pub command: Option<Command>,

        /// Directory to look for the config file in
        #[clap(long, global = true)]
        pub config_dir: Option<path::PathBuf>,

        /// Log debug information
        #[clap(short, long, global = true)]
        pub verbose: bool,
    }

    #[derive(Subcommand)]
    pub enum Command {
        /// Search a season of a show and print its episodes
        Search {
            /// Title of the show
            title: String,

            /// Season number
            #[clap(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
            season: u32,
        },

        /// Download the poster of an episode
        Poster {
            /// IMDb identifier of the episode
            episode_id: String,

            /// File to write the poster to
            output: path::PathBuf,
        },

        /// Print the config file path
        Config {
            /// Write the current settings to the config file
            #[clap(long)]
            init: bool,
        },
    }
}
