use anyhow::{anyhow, Context, Result};
use clap::Parser;
use iced::Application;
use tracing::Level;

use tv_show_finder::core::cli::{cli_data::Cli, handle_cli::handle_cli};
use tv_show_finder::core::paths::PATHS;
use tv_show_finder::core::settings_config::Config;
use tv_show_finder::gui::TvShowFinderGui;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Some(config_dir) = cli.config_dir {
        PATHS
            .write()
            .map_err(|_| anyhow!("paths lock poisoned"))?
            .set_config_dir_path(config_dir);
    }

    let config = Config::load().context("failed to load the config")?;

    if let Some(command) = cli.command {
        // Everything runs on one thread, completions are applied as they arrive
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start the async runtime")?;

        return runtime.block_on(handle_cli(command, &config));
    }

    TvShowFinderGui::run(iced::Settings::with_flags(config)).context("failed to run the gui")
}
