use anyhow::Context;
use clap::Parser;
use hot_coffee::api::create_router;
use hot_coffee::config::{Cli, Config};
use hot_coffee::lifecycle::{setup_tracing, CoffeeShop, ShopOptions};
use hot_coffee::storage::{seed_defaults, FileBackend};
use resource_actor::Backend;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse())?;

    let backend = FileBackend::open(&config.data_dir)
        .await
        .with_context(|| format!("failed to open {}", config.data_dir.display()))?;
    // Keep the guard alive so buffered file logs are flushed on exit.
    let _guard = setup_tracing(Some(backend.root()));

    let backend: Arc<dyn Backend> = Arc::new(backend);
    seed_defaults(&backend)
        .await
        .context("failed to seed data directory")?;

    let shop = CoffeeShop::start(
        backend,
        ShopOptions {
            buffer: config.buffer,
            seed: config.seed,
            export_reports: true,
        },
    )
    .await?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, data_dir = %config.data_dir.display(), "Listening");

    let served = axum::serve(listener, create_router(shop.state()))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!(error = %e, "Server error");
    }

    shop.shutdown().await?;
    served.context("server failed")
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C signal, shutting down gracefully..."),
        _ = terminate => info!("Received SIGTERM signal, shutting down gracefully..."),
    }
}
