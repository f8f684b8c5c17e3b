//! Tracing subscriber setup shared by the relay binaries.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose events are shown by default next to the calling binary.
const RELAY_CRATES: &[&str] = &["relay_server", "relay_client", "relay_shared", "tower_http"];

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Without it, the binary named `bin_name`
/// and the relay crates log at `default_level`.
///
/// # Arguments
///
/// * `bin_name` - Binary name, usually `env!("CARGO_BIN_NAME")`
/// * `default_level` - Level used when `RUST_LOG` is not set (e.g. `"info"`)
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(bin_name, default_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

fn default_directives(bin_name: &str, default_level: &str) -> String {
    let bin_target = bin_name.replace('-', "_");
    std::iter::once(bin_target.as_str())
        .chain(RELAY_CRATES.iter().copied())
        .map(|target| format!("{target}={default_level}"))
        .collect::<Vec<_>>()
        .join(",")
}
