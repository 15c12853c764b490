//! Provider status and config bootstrap commands.

use std::path::Path;

use crate::config::{self, Config};
use crate::error::ResultExt;
use crate::links::Platform;

use super::display_config_path;

/// Show which providers are configured
pub fn cmd_providers(config: &Config, config_path: Option<&Path>) -> anyhow::Result<()> {
    println!("Checking catalog providers...\n");

    for platform in Platform::ALL {
        match missing_credentials(config, platform) {
            None => println!("✓ {} ({})", platform.display_name(), platform),
            Some(hint) => {
                println!("✗ {} ({}): not configured", platform.display_name(), platform);
                println!("  {}", hint);
            }
        }
    }

    println!();
    println!("Config file: {}", display_config_path(config_path));
    println!(
        "Preferred platform: {}",
        config
            .preferences
            .preferred_platform
            .as_deref()
            .unwrap_or("(none)")
    );
    Ok(())
}

/// Write a config file with default settings
pub fn cmd_init_config(path: Option<&Path>, force: bool) -> anyhow::Result<()> {
    let existing = match path {
        Some(path) => Some(path.to_path_buf()),
        None => config::config_path(),
    };

    if let Some(ref existing) = existing
        && existing.exists()
        && !force
    {
        println!("Config already exists at {}", existing.display());
        println!("Use --force to overwrite it with defaults.");
        return Ok(());
    }

    let written = match path {
        Some(path) => config::save_to(&Config::default(), path).map(|()| path.to_path_buf()),
        None => config::save(&Config::default()),
    }
    .with_context("Failed to write default config")?;

    println!("✓ Wrote default config to {}", written.display());
    Ok(())
}

/// Setup hint for a provider that can't search, or `None` if it's ready
fn missing_credentials(config: &Config, platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::Spotify if config.credentials.spotify().is_none() => {
            Some("Set SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET, or add them to [credentials]")
        }
        Platform::YouTube
            if config
                .credentials
                .youtube_api_key
                .as_deref()
                .is_none_or(str::is_empty) =>
        {
            Some("Set YOUTUBE_API_KEY, or add youtube_api_key to [credentials]")
        }
        _ => None,
    }
}
