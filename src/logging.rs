// SPDX-License-Identifier: MPL-2.0
//! Logging setup for the application.
//!
//! Installs a global `tracing` subscriber writing to stderr. The filter is
//! read from `CKD_LENS_LOG` (same syntax as `RUST_LOG`) and defaults to
//! `info` for this crate and `warn` for everything else.

use std::sync::OnceLock;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Environment variable holding the log filter directive.
pub const ENV_LOG_FILTER: &str = "CKD_LENS_LOG";

const DEFAULT_FILTER: &str = "warn,ckd_lens=info";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing. Subsequent calls are no-ops.
///
/// Failures are returned so the caller can keep running without logs.
pub fn init() -> Result<(), LoggingError> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let subscriber = Registry::default()
        .with(build_env_filter(std::env::var(ENV_LOG_FILTER).ok().as_deref()))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr));
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = INITIALIZED.set(());

    tracing::debug!("logging initialized");
    Ok(())
}

fn build_env_filter(directive: Option<&str>) -> EnvFilter {
    match directive.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directive) => EnvFilter::try_new(directive).unwrap_or_else(|err| {
            eprintln!("Invalid {ENV_LOG_FILTER} value '{directive}': {err}; using defaults");
            EnvFilter::new(DEFAULT_FILTER)
        }),
        None => EnvFilter::new(DEFAULT_FILTER),
    }
}
