//! CLI command definitions and dispatch.
//!
//! Each subcommand group is implemented in its own submodule:
//! - `resolve`: Redirect planning and direct matching
//! - `providers`: Provider status and config bootstrap

mod providers;
mod resolve;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

use crate::config::{self, Config, Credentials};

pub use providers::{cmd_init_config, cmd_providers};
pub use resolve::{cmd_match, cmd_resolve};

/// Music Redirect CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Spotify client ID (or set SPOTIFY_CLIENT_ID env var)
    #[arg(long, global = true, env = "SPOTIFY_CLIENT_ID", hide_env_values = true)]
    pub spotify_client_id: Option<String>,

    /// Spotify client secret (or set SPOTIFY_CLIENT_SECRET env var)
    #[arg(long, global = true, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub spotify_client_secret: Option<String>,

    /// YouTube Data API key (or set YOUTUBE_API_KEY env var)
    #[arg(long, global = true, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Translate a track link to the preferred platform
    Resolve {
        /// Spotify, Apple Music or YouTube track URL
        url: String,
        /// Preferred platform: spotify, apple, youtube (defaults to the config file)
        #[arg(short, long)]
        pref: Option<String>,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Find a track on every platform by its metadata
    Match {
        /// Track title
        #[arg(long)]
        title: String,
        /// Artist name
        #[arg(long)]
        artist: String,
        /// Album name
        #[arg(long)]
        album: Option<String>,
        /// Track duration in milliseconds
        #[arg(long)]
        duration_ms: Option<u64>,
        /// Track number on the album
        #[arg(long)]
        track_number: Option<u32>,
        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show which providers are configured
    Providers,
    /// Write a config file with default settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let rt = Runtime::new()?;

    match &cli.command {
        Commands::Resolve { url, pref, json } => {
            let config = load_config(cli);
            cmd_resolve(&rt, &config, url, pref.as_deref(), *json)
        }
        Commands::Match {
            title,
            artist,
            album,
            duration_ms,
            track_number,
            json,
        } => {
            let config = load_config(cli);
            let mut source = crate::catalog::TrackMetadata::new(title, artist);
            source.album = album.clone();
            source.duration_ms = *duration_ms;
            source.track_number = *track_number;
            cmd_match(&rt, &config, &source, *json)
        }
        Commands::Providers => cmd_providers(&load_config(cli), cli.config.as_deref()),
        Commands::InitConfig { force } => cmd_init_config(cli.config.as_deref(), *force),
    }
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Load the config file and apply credentials given on the command line or environment
pub(crate) fn load_config(cli: &Cli) -> Config {
    let mut config = match cli.config.as_deref() {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    config.credentials.merge(&Credentials {
        spotify_client_id: cli.spotify_client_id.clone(),
        spotify_client_secret: cli.spotify_client_secret.clone(),
        youtube_api_key: cli.youtube_api_key.clone(),
    });

    config
}

/// Config file path for display, honoring `--config`
pub(crate) fn display_config_path(explicit: Option<&Path>) -> String {
    explicit
        .map(Path::to_path_buf)
        .or_else(config::config_path)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<no config directory>".to_string())
}
