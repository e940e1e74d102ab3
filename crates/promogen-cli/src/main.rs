//! PromoGen entry point.
//!
//! # Usage
//!
//! ```text
//! promogen [OPTIONS]
//!
//! Options:
//!   --data-dir <DIR>   Directory holding promo_settings.json and promo_history.json
//!   --config   <FILE>  TOML config file [default: platform config dir]/config.toml
//! ```
//!
//! | Variable            | Description                          |
//! |---------------------|--------------------------------------|
//! | `PROMOGEN_DATA_DIR` | Same as `--data-dir`                 |
//! | `PROMOGEN_CONFIG`   | Same as `--config`                   |
//! | `RUST_LOG`          | Log filter; overrides `logging.level` |
//!
//! Logs go to stderr so they never interleave with the prompts on stdout.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use promogen_cli::application::session::SessionController;
use promogen_cli::infrastructure::console::{shell, Console};
use promogen_cli::infrastructure::storage::config::{load_config, load_config_from, resolve_data_dir};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Interactive promo code generator with saved templates and history.
#[derive(Debug, Parser)]
#[command(name = "promogen", version)]
struct Cli {
    /// Directory for the settings and history files.
    #[arg(long, env = "PROMOGEN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Path to the TOML config file.
    #[arg(long, env = "PROMOGEN_CONFIG")]
    config: Option<PathBuf>,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => load_config().context("failed to load config")?,
    };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.level)),
        )
        .init();

    let data_dir = resolve_data_dir(cli.data_dir, &app_config);
    info!(data_dir = %data_dir.display(), "PromoGen starting");

    let store = app_config.storage.open_store(&data_dir);
    let mut controller = SessionController::new(store, rand::thread_rng());
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    shell::run(&mut controller, &mut console).context("session failed")?;

    info!("PromoGen stopped");
    Ok(())
}
