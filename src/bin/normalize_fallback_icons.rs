// email-icons - bin/normalize_fallback_icons.rs
//
// Entry point for fallback PNG normalisation: strips legacy
// `_<type>_<timestamp>` suffixes and back-fills the dark placeholder.

use clap::Parser;
use email_icons::app::normalize::normalize_fallback_icons;
use email_icons::platform::config::{load_config, AppConfig};
use email_icons::util;
use email_icons::util::error::{EmailIconsError, Result};
use std::path::PathBuf;

/// Rename exported fallback PNG icons to their canonical names.
///
/// Scans `<root>/fallback/light` and `<root>/fallback/dark`, renaming
/// `<stem>_<type>_<timestamp>.png` to `<stem>.png`, then copies the light
/// `hero_order_confirm.png` into dark/ if no dark version exists.
#[derive(Parser, Debug)]
#[command(name = "normalize-fallback-icons", version, about)]
struct Cli {
    /// Asset root containing fallback/ (default: public/email-icons).
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
            tracing::error!(error = %e, "Fallback icon normalisation failed");
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = startup(&cli)?;
    let fallback_dir = config.fallback_dir();
    tracing::info!(fallback_dir = %fallback_dir.display(), "Normalising fallback icons");

    let summary = normalize_fallback_icons(&fallback_dir, |event| println!("{event}"))?;

    println!(
        "Done. Renamed {} files, skipped {}{}",
        summary.renamed,
        summary.skipped,
        if summary.placeholder_copied {
            ", created dark placeholder"
        } else {
            ""
        }
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
