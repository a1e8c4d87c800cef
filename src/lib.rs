//! Route registry with self-describing API documentation.
//!
//! Declare routes, attach one handler per HTTP method, and serve the
//! resulting documentation tree as JSON from an introspection endpoint.
//!
//! ```no_run
//! use restdoc::api::{params, HttpMethod, Registry};
//! use restdoc::transport::{AxumTransport, Handler};
//!
//! # fn main() -> Result<(), restdoc::api::ApiError> {
//! let mut transport = AxumTransport::new();
//! let mut api = Registry::new(&mut transport, "/api");
//!
//! api.add_route_with("users/:id", "A user", params([("id", "User ID")]))?
//!     .add_endpoint(HttpMethod::Get, Handler::new(|_req| async { "user" }), "Fetch a user")?;
//! api.add_docs_endpoint("docs")?;
//! drop(api);
//!
//! let router = transport.into_router();
//! # let _ = router;
//! # Ok(())
//! # }
//! ```

// Core
pub mod api;
pub mod transport;

// Serving
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use api::{ApiError, HttpMethod, Registry, Route};
pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use transport::{AxumTransport, Handler, Transport};
