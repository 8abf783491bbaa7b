//! `larder` — Terminal inventory manager backed by a remote document store.
//!
//! Built on [ratatui](https://ratatui.rs) with reactive snapshots from
//! `larder-core`'s [`Inventory`](larder_core::Inventory). One screen: a
//! searchable item list with per-row increment/decrement and an add-item
//! modal.
//!
//! Logs are written to a file (default `/tmp/larder.log`) to avoid
//! corrupting the terminal UI. A background data bridge task executes
//! inventory operations and streams snapshot updates into the TUI action
//! loop.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod data_bridge;
mod event;
mod theme;
mod tui;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use secrecy::SecretString;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use larder_core::{AuthCredentials, Inventory, StoreConfig, TlsVerification};
use larder_store::StoreClient;

use crate::app::App;
use crate::data_bridge::run_data_bridge;

/// Terminal UI for tracking pantry inventory in a remote document store.
#[derive(Parser, Debug)]
#[command(name = "larder", version, about)]
struct Cli {
    /// Document store URL (e.g., https://store.example.com)
    #[arg(short = 'u', long, env = "LARDER_URL")]
    url: Option<String>,

    /// Collection holding the inventory documents
    #[arg(short = 'c', long, default_value = "inventory", env = "LARDER_COLLECTION")]
    collection: String,

    /// API key for the store
    #[arg(short = 'k', long, env = "LARDER_API_KEY")]
    api_key: Option<String>,

    /// Skip TLS certificate verification (self-hosted stores)
    #[arg(long)]
    insecure: bool,

    /// Log file path (defaults to /tmp/larder.log)
    #[arg(long, default_value = "/tmp/larder.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("larder={log_level},larder_core={log_level}"))
    });

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("larder.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

/// Build a [`StoreConfig`] from CLI args, if a URL was provided.
fn config_from_cli(cli: &Cli) -> Result<Option<StoreConfig>> {
    let Some(url_str) = cli.url.as_deref() else {
        return Ok(None);
    };
    let url = url_str
        .parse()
        .map_err(|e| eyre!("invalid store URL {url_str:?}: {e}"))?;

    let auth = cli.api_key.as_ref().map_or(AuthCredentials::Anonymous, |key| {
        AuthCredentials::ApiKey(SecretString::from(key.clone()))
    });

    let tls = if cli.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(Some(StoreConfig {
        url,
        auth,
        collection: cli.collection.clone(),
        tls,
        timeout: Duration::from_secs(30),
    }))
}

/// Try loading a store config from the shared config file (default profile).
fn config_from_file() -> Option<StoreConfig> {
    let cfg = larder_config::load_config().ok()?;
    larder_config::default_store_config(&cfg)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(
        url = cli.url.as_deref().unwrap_or("(not set)"),
        collection = %cli.collection,
        "starting larder"
    );

    // Priority: CLI flags > config file default profile
    let config = match config_from_cli(&cli)? {
        Some(config) => config,
        None => config_from_file().ok_or_else(|| {
            eyre!(
                "no store configured — pass --url (or set LARDER_URL), \
                 or add a profile to {}",
                larder_config::config_path().display()
            )
        })?,
    };

    let inventory: Inventory<StoreClient> =
        Inventory::connect(&config).map_err(|e| eyre!("failed to set up store client: {e}"))?;

    // Wire the data bridge: commands flow out of the app, actions flow back in
    let (command_tx, command_rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(command_tx);

    let cancel = CancellationToken::new();
    let bridge = tokio::spawn(run_data_bridge(
        inventory,
        app.action_sender(),
        command_rx,
        cancel.clone(),
    ));

    let result = app.run().await;

    cancel.cancel();
    let _ = bridge.await;

    result
}
