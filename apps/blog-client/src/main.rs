//! # Inkpost Blog Client
//!
//! Console front end: compose posts, submit them to the store and browse
//! the feed.

use std::sync::Arc;

use inkpost_core::LifecycleController;
use tokio::io::{AsyncBufReadExt, BufReader};

mod commands;
mod config;
mod console;
mod state;
mod telemetry;

use commands::{Command, Flow, HELP, Session};
use config::AppConfig;
use console::ConsoleSurface;
use state::AppState;
use telemetry::{TelemetryConfig, init_telemetry};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(
        store = config.store_url.as_deref().unwrap_or("in-memory"),
        "Starting Inkpost blog client"
    );

    let state = AppState::new(&config);
    let controller = LifecycleController::new(
        state.store.clone(),
        state.editor.clone(),
        Arc::new(ConsoleSurface::stdout()),
    )
    .with_editor_target(config.editor_target.clone());

    let mut session = Session::new(controller, state.editor.clone());
    if let Err(e) = session.start().await {
        tracing::warn!(error = %e, "Initial load failed");
    }
    println!("{HELP}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if session.execute(command).await == Flow::Quit {
                    break;
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    tracing::info!(phase = ?session.controller().phase(), "Blog client stopped");
    Ok(())
}
