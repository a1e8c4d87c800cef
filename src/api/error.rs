//! Registration error definitions.

use thiserror::Error;

use crate::api::method::HttpMethod;
use crate::transport::TransportError;

/// Errors raised while declaring routes and endpoints.
///
/// All of these are setup mistakes: they surface synchronously from the
/// registration call and leave the registry unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The route or docs path was empty.
    #[error("route path must not be empty")]
    EmptyPath,

    /// A route with the same resolved path already exists.
    #[error("route {path} is already registered")]
    DuplicateRoute { path: String },

    /// The route already has an endpoint for this method.
    #[error("{method} endpoint is already registered for route {path}")]
    DuplicateEndpoint { path: String, method: HttpMethod },

    /// No route is declared at this path.
    #[error("route {path} is not registered")]
    UnknownRoute { path: String },

    /// A method outside GET/POST/PUT/DELETE reached the codec.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The transport refused the binding.
    #[error("transport rejected binding: {0}")]
    Transport(#[from] TransportError),
}

/// Result type for registration operations.
pub type ApiResult<T> = Result<T, ApiError>;
