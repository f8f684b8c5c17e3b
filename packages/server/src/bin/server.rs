//! WebSocket relay server.
//!
//! Receives JSON messages from clients and broadcasts them to every connected client.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin relay-server -- --port 8080
//! ```

use std::net::IpAddr;

use clap::Parser;
use relay_server::{ServerConfig, ui::DEFAULT_HOST, ui::DEFAULT_PORT};
use relay_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value_t = DEFAULT_HOST)]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    // Run the server
    if let Err(e) = relay_server::run(ServerConfig::new(args.host, args.port)).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
