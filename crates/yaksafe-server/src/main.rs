//! YakSafe - keyword moderation API service.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use yaksafe_server::{Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};

/// YakSafe - keyword moderation API service
#[derive(Parser, Debug)]
#[command(name = "yaksafe", version, about)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Omit the per-category hits map from /moderate responses
    #[arg(long)]
    no_hits: bool,
}

/// Initialize console logging.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "yaksafe_server={log_level},yaksafe_core={log_level},warn"
        ))
    });

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(&args);

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        include_hits: !args.no_hits,
    };

    let server = match Server::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
