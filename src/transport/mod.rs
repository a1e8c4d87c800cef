//! Transport capability consumed by the registry.
//!
//! # Data Flow
//! ```text
//! Registry / Route
//!     → Transport::bind(method, full_path, handler)
//!     → concrete transport records the binding
//!     → [server built from transport] dispatches requests to handlers
//! ```
//!
//! # Design Decisions
//! - The registry only forwards handlers; it never inspects requests
//! - Binding is fallible so a transport can refuse bad or clashing paths
//! - `bind_get` is the read-only convenience used by the docs endpoint

pub mod axum_transport;
pub mod handler;

use thiserror::Error;

use crate::api::HttpMethod;

pub use self::axum_transport::AxumTransport;
pub use self::handler::Handler;

/// Errors reported by a transport when a binding is refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The path cannot be expressed by this transport.
    #[error("invalid path {path}: {reason}")]
    InvalidPath { path: String, reason: String },

    /// The path differs from an already bound path only in parameter names.
    #[error("{path} overlaps with bound path {existing}")]
    Overlap { path: String, existing: String },

    /// A handler is already bound for this method and path.
    #[error("{method} {path} is already bound")]
    Conflict { method: HttpMethod, path: String },
}

/// An HTTP server capability that handlers can be bound to.
pub trait Transport {
    /// Bind `handler` to requests matching `method` and `path`.
    fn bind(
        &mut self,
        method: HttpMethod,
        path: &str,
        handler: Handler,
    ) -> Result<(), TransportError>;

    /// Bind a read-only GET handler.
    fn bind_get(&mut self, path: &str, handler: Handler) -> Result<(), TransportError> {
        self.bind(HttpMethod::Get, path, handler)
    }
}
