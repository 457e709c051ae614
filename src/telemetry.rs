//! Tracing subscriber setup.
//!
//! The engine itself only emits `tracing` events; binaries and tests that
//! want to see them call [`init_tracing`] once at startup.

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// `RUST_LOG` wins over the configured level when set.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Installs the global subscriber described by `config`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left untouched.
pub fn init_tracing(config: &LoggingConfig) -> bool {
    let subscriber = tracing_subscriber::registry().with(build_filter(&config.level));

    let installed = match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true);
            subscriber.with(fmt_layer).try_init().is_ok()
        }
        LogFormat::Compact => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .compact()
                .with_target(true)
                .with_file(false)
                .with_line_number(false);
            subscriber.with(fmt_layer).try_init().is_ok()
        }
    };

    if installed {
        tracing::info!(
            level = %config.level,
            format = ?config.format,
            "Logging initialized"
        );
    }

    installed
}
