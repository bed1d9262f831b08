//! Encoding showcase server.
//!
//! Serves a plain-text page listing twelve encodings of a fixed message.
//!
//! ```text
//!     Client Request ──▶ listener ──▶ axum router ──▶ index handler
//!                                                         │
//!                                       encoding::Encoding::ALL
//!                                                         │
//!     Client Response ◀──────────── report (13 lines) ◀───┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use encoding_showcase::config;
use encoding_showcase::lifecycle;
use encoding_showcase::observability::logging;

#[derive(Parser)]
#[command(name = "encoding-showcase")]
#[command(about = "Serve a fixed message in twelve text encodings", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port; overrides the config file and PORT.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let (config, port_source) = match config::load(cli.config.as_deref(), cli.port) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init_logging("info");
            tracing::error!(error = %e, "Invalid configuration");
            return Err(e.into());
        }
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("encoding-showcase v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if let Err(e) = lifecycle::run(config, port_source).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
