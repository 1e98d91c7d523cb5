use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use userdesk::{AppConfig, AppState, build_router};

#[derive(Parser)]
#[command(name = "userdesk")]
#[command(about = "Server-rendered user directory over an in-memory store")]
struct Cli {
    /// Address to listen on (overrides USERDESK_BIND_ADDR)
    #[arg(long)]
    bind_addr: Option<SocketAddr>,
    /// Rows per list page (overrides USERDESK_PAGE_ROWS)
    #[arg(long)]
    page_rows: Option<i64>,
    /// Start with an empty directory
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(bind_addr) = cli.bind_addr {
        config.bind_addr = bind_addr;
    }
    if let Some(page_rows) = cli.page_rows {
        config.page_rows = page_rows;
    }
    if cli.no_seed {
        config.seed = false;
    }
    config.validate().context("invalid configuration")?;

    let app = build_router(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(
        bind_addr = %config.bind_addr,
        page_rows = config.page_rows,
        seeded = config.seed,
        "userdesk started"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("userdesk=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Signal that stopped the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopSignal {
    Interrupt,
    Terminate,
}

impl StopSignal {
    fn name(self) -> &'static str {
        match self {
            Self::Interrupt => "SIGINT",
            Self::Terminate => "SIGTERM",
        }
    }
}

async fn shutdown_signal() {
    let signal = tokio::select! {
        signal = wait_for_interrupt() => signal,
        signal = wait_for_terminate() => signal,
    };

    info!(signal = signal.name(), "draining connections before exit");
}

async fn wait_for_interrupt() -> StopSignal {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "ctrl+c handler unavailable, SIGINT ignored");
        std::future::pending::<()>().await;
    }
    StopSignal::Interrupt
}

#[cfg(unix)]
async fn wait_for_terminate() -> StopSignal {
    use tokio::signal::unix::{SignalKind, signal};

    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            error!(error = %err, "sigterm handler unavailable, SIGTERM ignored");
            std::future::pending::<()>().await;
        }
    }
    StopSignal::Terminate
}

#[cfg(not(unix))]
async fn wait_for_terminate() -> StopSignal {
    std::future::pending::<StopSignal>().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_signals_log_their_posix_names() {
        assert_eq!(StopSignal::Interrupt.name(), "SIGINT");
        assert_eq!(StopSignal::Terminate.name(), "SIGTERM");
    }

    #[tokio::test]
    async fn shutdown_waits_for_a_signal() {
        let waited = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            shutdown_signal(),
        )
        .await;
        assert!(waited.is_err());
    }
}
