//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Wrap the router built from registered endpoints
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener and serve until shutdown

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::request::{make_span, X_REQUEST_ID};
use crate::lifecycle::ShutdownSignal;

/// HTTP server for a documented API.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server around `app`, usually `AxumTransport::into_router()`.
    pub fn new(config: &ServerConfig, app: Router) -> Self {
        Self {
            router: Self::build_router(config, app),
        }
    }

    /// Apply the middleware stack.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, app: Router) -> Router {
        app.layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(make_span))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid))
    }

    /// The router with middleware applied.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
