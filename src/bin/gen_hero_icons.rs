// email-icons - bin/gen_hero_icons.rs
//
// Entry point for hero icon generation. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Writing every catalog icon's light and dark SVG

use clap::Parser;
use email_icons::app::generate::generate_hero_icons;
use email_icons::platform::config::{load_config, AppConfig};
use email_icons::util;
use email_icons::util::error::{EmailIconsError, Result};
use std::path::PathBuf;

/// Generate placeholder SVG hero icons for the transactional email templates.
///
/// Writes `<root>/hero/<category>/<name>.svg` and `<name>_dark.svg` for every
/// known icon, overwriting existing files.
#[derive(Parser, Debug)]
#[command(name = "gen-hero-icons", version, about)]
struct Cli {
    /// Asset root containing hero/ (default: public/email-icons).
    #[arg(long = "root")]
    root: Option<PathBuf>,

    /// Config file (default: ./email-icons.toml if present).
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        if !matches!(e, EmailIconsError::Config(_)) {
            tracing::error!(error = %e, "Hero icon generation failed");
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = startup(&cli)?;
    let hero_dir = config.hero_dir();
    tracing::info!(hero_dir = %hero_dir.display(), "Generating hero icons");

    let summary = generate_hero_icons(&hero_dir, |asset| {
        println!("Wrote {}", asset.path.display());
    })?;

    println!(
        "Done. Generated {} hero icons across {} categories in {}",
        summary.files_written,
        summary.categories,
        hero_dir.display()
    );
    Ok(())
}

/// Load config, start logging, and apply the `--root` override.
///
/// Logging is started even when the config file fails, so the failure is
/// recorded before the process exits.
fn startup(cli: &Cli) -> Result<AppConfig> {
    let (config, warnings) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            util::logging::init(cli.debug, None);
            tracing::error!(error = %e, "Failed to load config");
            return Err(e.into());
        }
    };

    util::logging::init(cli.debug, config.log_level.as_deref());
    for warning in &warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    Ok(config.with_root_override(cli.root.clone()))
}
