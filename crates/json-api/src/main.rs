//! JSON sample service.
//!
//! Same surface as the plain variant but every response body is JSON:
//! `{"status":"healthy"}` for health, `{"bucket_count", "buckets"}` for a
//! successful listing, and a 500 `{"error": ...}` for a failed one.

mod http;
mod state;

use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use common::prelude::{report_build_info, S3BucketSource};

use state::AppState;

/// JSON sample service - lists S3 buckets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on for HTTP requests
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stdout());
    let log_level: tracing::Level = args.log_level.parse().unwrap_or(tracing::Level::INFO);
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let stdout_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stdout_layer).init();

    report_build_info();

    // One S3 client per process, shared across requests
    let buckets = S3BucketSource::from_env().await;
    let state = AppState::new(Arc::new(buckets));

    // Set up graceful shutdown
    let (shutdown_tx, mut shutdown_rx) = watch::channel(());
    let graceful_shutdown = async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl+c");
        tracing::info!("Received shutdown signal");
        let _ = shutdown_tx.send(());
    };
    tokio::spawn(graceful_shutdown);

    let listen_addr = SocketAddr::from_str(&format!("0.0.0.0:{}", args.port))?;
    let router = http::router(state);

    tracing::info!("JSON API listening on {}", listen_addr);
    let listener = tokio::net::TcpListener::bind(listen_addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.changed().await;
        })
        .await?;

    tracing::info!("JSON API shutdown complete");
    Ok(())
}
