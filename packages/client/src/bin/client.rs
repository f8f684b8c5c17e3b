//! Command-line client for the relay.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin relay-client -- listen --url ws://127.0.0.1:8080
//! cargo run --bin relay-client -- chat
//! cargo run --bin relay-client -- telemetry --interval-secs 3 --retry-secs 5
//! ```

use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use relay_client::{DEFAULT_URL, TelemetryConfig, run_chat, run_listen, run_telemetry};
use relay_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every message broadcast by the relay.
    Listen(ConnectArgs),
    /// Type messages at a prompt and see every broadcast.
    Chat(ConnectArgs),
    /// Publish mock telemetry readings, reconnecting on failure.
    Telemetry(TelemetryArgs),
}

#[derive(Args, Debug, Clone)]
struct ConnectArgs {
    /// Relay WebSocket URL
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,
}

#[derive(Args, Debug, Clone)]
struct TelemetryArgs {
    #[command(flatten)]
    connect: ConnectArgs,

    /// Seconds between readings
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u64).range(1..))]
    interval_secs: u64,

    /// Seconds to wait before reconnecting
    #[arg(long, default_value_t = 5)]
    retry_secs: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Chat keeps the terminal for the prompt
    let level = match cli.command {
        Command::Chat(_) => "warn",
        _ => "info",
    };
    setup_logger(env!("CARGO_BIN_NAME"), level);

    let result = match cli.command {
        Command::Listen(args) => run_listen(&args.url).await,
        Command::Chat(args) => run_chat(&args.url).await,
        Command::Telemetry(args) => {
            let config = TelemetryConfig {
                interval: Duration::from_secs(args.interval_secs),
                retry_delay: Duration::from_secs(args.retry_secs),
                ..TelemetryConfig::new(args.connect.url)
            };
            run_telemetry(&config).await
        }
    };

    if let Err(e) = result {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
