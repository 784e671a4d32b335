//! Demo TUI application for rat-stack.
//!
//! Set `RAT_STACK_LOG=<path>` to write router traces to a file
//! (`RUST_LOG` filters them, default `debug`).

mod pages;

use anyhow::Context as _;
use rat_stack::{Application, Router, TracingObserver};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::pages::Menu;

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let router = Router::new(Menu::default()).with_observer(TracingObserver);
    Application::new().run(router)
}

fn init_tracing() -> anyhow::Result<()> {
    let Ok(path) = std::env::var("RAT_STACK_LOG") else {
        return Ok(());
    };
    let file = std::fs::File::create(&path)
        .with_context(|| format!("failed to create log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
