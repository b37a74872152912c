//! hello-server entry point.
//!
//! Initializes tracing, reads the listen port from the environment, builds the
//! router and serves it. Any startup failure is logged and exits with status 1.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_server::config::{
    BuildInfo, HttpServerConfig, LogFormat, DEFAULT_LOG_FILTER, LOG_FILTER_ENV,
};
use hello_server::http::start_server;
use hello_server::routes::create_router;
use hello_server::state::AppState;
use hello_server::Error;

/// hello-server: greeting, probe and build-info endpoints
#[derive(Parser, Debug)]
#[command(name = "hello-server", version, about)]
struct Args {
    /// Log level filter (e.g., "hello_server=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Log output format (overrides LOG_FORMAT)
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var(LOG_FILTER_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let (log_format, format_error) = match args.log_format {
        Some(format) => (format, None),
        None => match LogFormat::from_env() {
            Ok(format) => (format, None),
            Err(e) => (LogFormat::default(), Some(e)),
        },
    };

    let json = log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();

    if let Some(e) = format_error {
        tracing::error!(error = %e, "Invalid logging configuration");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Error> {
    let config = HttpServerConfig::from_env()?;

    let build = BuildInfo::from_build_env();
    tracing::debug!(
        commit = %build.commit,
        build_date = %build.build_date,
        runtime = %build.runtime_version,
        platform = %build.platform,
        "Loaded build info"
    );

    let version = build.version.clone();
    let app = create_router(AppState::new(build));

    start_server(app, &config, &version).await?;

    Ok(())
}
