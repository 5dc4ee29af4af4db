//! TickTick MCP server binary.
//!
//! Binds the Streamable HTTP MCP service and serves it until ctrl-c. The
//! upstream session is created lazily on the first tool call that needs
//! it, so the server starts fine without a token; tools report the
//! missing credential as text instead.

use std::net::IpAddr;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticktick_mcp::mcp::create_mcp_service;
use ticktick_mcp::ticktick::SessionManager;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Server error: {0}")]
    #[diagnostic(code(ticktick_mcp::binary::io))]
    Io(#[from] std::io::Error),
}

#[derive(Parser)]
#[command(name = "ticktick-mcp")]
#[command(author, version, about = "TickTick MCP server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticktick_mcp=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    init_tracing();

    let cli = Cli::parse();

    let sessions = std::sync::Arc::new(SessionManager::from_env());
    let ct = CancellationToken::new();
    let mcp_service = create_mcp_service(sessions, ct.clone());

    let app = axum::Router::new()
        .nest_service("/mcp", mcp_service)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("TickTick MCP server listening on http://{addr}/mcp");

    let shutdown_ct = ct.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
            shutdown_ct.cancel();
        })
        .await?;

    Ok(())
}
