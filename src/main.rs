//! restdoc demo server.
//!
//! Declares a small sample API, binds the documentation endpoint and
//! serves everything until Ctrl+C / SIGTERM.
//!
//! ```text
//! config (TOML, optional)
//!     → logging
//!     → Registry over AxumTransport (routes, endpoints, docs)
//!     → HttpServer (trace / timeout / request-id layers)
//!     → serve until shutdown signal
//! ```

use std::path::PathBuf;

use axum::Json;
use clap::Parser;
use serde_json::json;
use tokio::net::TcpListener;

use restdoc::api::{params, ApiResult, HttpMethod, Registry};
use restdoc::config::{load_config, ApiConfig, ServerConfig};
use restdoc::lifecycle::{wait_for_signal, Shutdown};
use restdoc::observability::logging;
use restdoc::transport::{AxumTransport, Handler};
use restdoc::HttpServer;

#[derive(Parser)]
#[command(name = "restdoc")]
#[command(
    about = "Serve a sample API together with its generated documentation",
    long_about = None
)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init(&config.observability)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "restdoc starting");

    let mut transport = AxumTransport::new();
    register_sample_api(&mut transport, &config.api)?;
    tracing::info!(bindings = transport.bindings().len(), "API registered");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(&config, transport.into_router());
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// One route outside the API namespace, one inside it, plus the docs.
fn register_sample_api(transport: &mut AxumTransport, api_config: &ApiConfig) -> ApiResult<()> {
    let mut api = Registry::new(transport, &api_config.base_path);

    if let Some(docs_path) = &api_config.docs_path {
        api.add_docs_endpoint(docs_path)?;
    }

    let mut stuff =
        api.add_route_with("/non_api/stuff", "Random thingy", params([("a", "desc_a")]))?;
    stuff.add_endpoint(
        HttpMethod::Get,
        Handler::new(|_req| async { Json(json!({ "stuff": [] })) }),
        "Description of the GET endpoint",
    )?;
    stuff.add_endpoint_with(
        HttpMethod::Post,
        Handler::new(|_req| async { Json(json!({ "created": true })) }),
        "Description of the POST endpoint",
        params([("b", "desc_b")]),
    )?;

    let mut within = api.add_route("within/the/api", "More random thingy")?;
    within.add_endpoint(
        HttpMethod::Delete,
        Handler::new(|_req| async { Json(json!({ "deleted": true })) }),
        "Description of the DELETE endpoint",
    )?;
    within.add_endpoint_with(
        HttpMethod::Put,
        Handler::new(|_req| async { Json(json!({ "updated": true })) }),
        "Description of the PUT endpoint",
        params([("c", "desc_c")]),
    )?;

    Ok(())
}
