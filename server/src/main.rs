//! Rankboard leaderboard server
//!
//! Serves a live leaderboard over HTTP while a background task keeps
//! rewriting random ratings:
//! 1. Entrants live in an in-memory registry shared by all handlers
//! 2. A simulator updates one random entrant per interval
//!
//! Usage:
//!   rankboard-server --port 8080 --seed 10000
//!
//! Nothing is persisted; the leaderboard starts empty on every launch unless
//! `--seed` is given.

use std::{future::IntoFuture, sync::Arc, time::Duration};
use anyhow::{Context, Result};
use clap::Parser;
use rankboard_server::{build_router, with_drain_deadline, SHUTDOWN_GRACE};
use rankboard_sim::{SeedOptions, Simulator, SimulatorConfig};
use rankboard_store::Registry;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "rankboard-server")]
#[command(about = "In-memory leaderboard HTTP server")]
struct Args {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// HTTP port to listen on
    #[arg(short, long, env = "PORT", default_value = "8080")]
    port: u16,

    /// Number of entrants to seed at startup
    #[arg(short, long, env = "SEED_COUNT", default_value = "0")]
    seed: usize,

    /// Seconds between simulated rating updates (0 disables them)
    #[arg(long, env = "UPDATE_INTERVAL_SECS", default_value = "5")]
    update_interval_secs: u64,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    info!("Rankboard starting...");
    let registry = Arc::new(Registry::new());
    info!("Initialized in-memory registry");

    if args.seed > 0 {
        rankboard_sim::seed(&registry, args.seed, &SeedOptions::default())
            .context("Failed to seed registry")?;
    }

    let shutdown = CancellationToken::new();
    let simulator = (args.update_interval_secs > 0).then(|| {
        let config = SimulatorConfig {
            interval: Duration::from_secs(args.update_interval_secs),
            ..SimulatorConfig::default()
        };
        Simulator::new(Arc::clone(&registry), config).spawn(shutdown.clone())
    });

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP port {addr}"))?;

    println!("\n========================================");
    println!("  Rankboard Running");
    println!("========================================");
    println!("  HTTP:      http://{addr}");
    println!("  Entrants:  {}", registry.count());
    match args.update_interval_secs {
        0 => println!("  Updates:   disabled"),
        secs => println!("  Updates:   every {secs}s"),
    }
    println!("========================================\n");

    let app = build_router(Arc::clone(&registry));
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown(shutdown.clone()))
        .into_future();
    match with_drain_deadline(server, shutdown.clone(), SHUTDOWN_GRACE).await {
        Some(result) => result.context("HTTP server failed")?,
        None => warn!("Connections still open after {SHUTDOWN_GRACE:?}, forcing exit"),
    }

    // Covers the server exiting on its own without a signal.
    shutdown.cancel();
    if let Some(handle) = simulator {
        match handle.await {
            Ok(updates) => info!("Simulator applied {updates} updates"),
            Err(e) => warn!("Simulator task failed: {e}"),
        }
    }

    info!("Server exited");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM, cancelling `token` first.
async fn wait_for_shutdown(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = token.cancelled() => {},
    }

    info!("Shutting down server...");
    token.cancel();
}
