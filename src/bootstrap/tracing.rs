//! Tracing configuration for the command line client
//!
//! Use cases emit `tracing` spans and events; the HTTP adapter logs through
//! the `log` facade, which the subscriber bridges. Output goes to stderr so
//! command output on stdout stays clean.

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives
///
/// - **verbose**: debug for our crates, info for the HTTP stack
/// - **development**: info for our crates
/// - **otherwise**: warnings only
fn build_filter_directives(verbose: bool, is_dev: bool) -> Vec<String> {
    let own_level = if verbose {
        "debug"
    } else if is_dev {
        "info"
    } else {
        "warn"
    };

    vec![
        "warn".to_string(),
        format!("inkarta={}", own_level),
        format!("ink_app={}", own_level),
        format!("ink_infra={}", own_level),
        if verbose { "reqwest=info" } else { "reqwest=warn" }.to_string(),
        "hyper=warn".to_string(),
    ]
}

/// Initialize the global tracing subscriber
///
/// Respects `RUST_LOG` when set. Must be called once, before any logging.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(verbose: bool) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(verbose, is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}
