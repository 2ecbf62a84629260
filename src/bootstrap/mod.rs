//! Process bootstrap: configuration, tracing, and wiring of ports to
//! adapters. Nothing in here knows about individual commands.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::resolve_config;
pub use tracing::init_tracing_subscriber;
pub use wiring::{display_size, wire_dependencies};
