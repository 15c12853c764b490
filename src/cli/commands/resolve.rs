//! Redirect planning and direct matching commands.

use tokio::runtime::Runtime;

use crate::catalog::{self, TrackMetadata};
use crate::config::Config;
use crate::error::ResultExt;
use crate::links::Platform;
use crate::matching::{MatchCandidate, Resolution, Resolver};
use crate::redirect::{self, RedirectPlan};

/// Translate a track link to the preferred platform
pub fn cmd_resolve(
    rt: &Runtime,
    config: &Config,
    url: &str,
    pref: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let preference = redirect::effective_preference(
        pref,
        config.preferences.preferred_platform.as_deref(),
    )
    .map(|p| p.parse::<Platform>())
    .transpose()
    .with_context("Invalid platform preference")?;

    let providers = catalog::build_providers(config);
    let plan = rt.block_on(redirect::plan_redirect(
        url,
        preference,
        &providers,
        &config.matching,
    ))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    match plan {
        RedirectPlan::Redirect { url } => {
            println!("→ {}", url);
        }
        RedirectPlan::Fallback {
            preferred,
            title,
            artist,
            links,
            alternatives,
        } => {
            match (title, artist) {
                (Some(title), Some(artist)) => println!("{} - {}", artist, title),
                _ => println!("Unknown track"),
            }
            println!();
            println!("✗ No exact match on {}.", preferred.display_name());

            if !links.is_empty() {
                println!();
                println!("Available on:");
                for (provider, link) in &links {
                    println!("  {:<8} {}", provider, link);
                }
            }

            if !alternatives.is_empty() {
                println!();
                println!("Similar tracks on {}:", preferred.display_name());
                for candidate in &alternatives {
                    print_candidate(candidate);
                }
            }
        }
    }

    Ok(())
}

/// Find a track on every platform by its metadata
pub fn cmd_match(
    rt: &Runtime,
    config: &Config,
    source: &TrackMetadata,
    json: bool,
) -> anyhow::Result<()> {
    if !source.is_searchable() {
        anyhow::bail!("Both --title and --artist must be non-empty");
    }

    let resolver = Resolver::from_config(config);
    let resolution = rt.block_on(resolver.resolve(source));

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    print_resolution(source, &resolution);
    Ok(())
}

fn print_resolution(source: &TrackMetadata, resolution: &Resolution) {
    println!("Matching: {} - {}", source.artist, source.title);
    if let Some(ref album) = source.album {
        println!("  Album:  {}", album);
    }
    println!();

    if resolution.is_empty() {
        println!("✗ No matches found.");
        return;
    }

    for platform in Platform::ALL {
        let id = platform.as_str();
        let link = resolution.links.get(id);
        let alternatives = resolution.alternatives.get(id);
        if link.is_none() && alternatives.is_none() {
            continue;
        }

        println!("{}:", platform.display_name());
        if let Some(link) = link {
            println!("  ✓ {}", link);
        }
        for candidate in alternatives.into_iter().flatten() {
            print_candidate(candidate);
        }
    }
}

fn print_candidate(candidate: &MatchCandidate) {
    let meta = &candidate.metadata;
    let album = meta
        .album
        .as_deref()
        .filter(|a| !a.trim().is_empty())
        .map(|a| format!(" [{}]", a))
        .unwrap_or_default();

    println!(
        "  ? {} - {}{} ({:.0}%)",
        meta.artist,
        meta.title,
        album,
        candidate.similarity * 100.0
    );
    println!("    {}", candidate.canonical_url);
}
