//! myservice entry point.
//!
//! Parses arguments, initializes tracing, loads optional configuration, binds
//! the listener and serves until the process is killed. Startup and bind
//! failure are reported on stdout; diagnostics go to stderr through tracing.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use myservice::config::{AppConfig, LoggingConfig, DEFAULT_LOG_FILTER, SERVICE_NAME};
use myservice::{create_router, Listener};

/// myservice: answers liveness and version checks over HTTP
#[derive(Parser, Debug)]
#[command(name = "myservice", version, about)]
struct Args {
    /// Optional TOML configuration file; built-in defaults are used without one
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level filter (e.g., "myservice=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn init_tracing(filter: &str, logging: &LoggingConfig) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));

    if logging.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match AppConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                println!("server failed: {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    // Priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    init_tracing(&log_filter, &config.logging);

    tracing::debug!(?config, "Loaded configuration");

    let listener = match Listener::bind(&config.http).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Listener failed to start");
            println!("server failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(&config.routes);

    println!("{} started on :{}", SERVICE_NAME, listener.local_addr().port());

    if let Err(e) = listener.serve(app).await {
        tracing::error!(error = %e, "Server stopped");
        println!("server failed: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
