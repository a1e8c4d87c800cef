//! Route registry and API documentation subsystem.
//!
//! # Data Flow
//! ```text
//! Setup (single-threaded):
//!     Registry::add_route(path, description, path_parameters)
//!     → path.rs (resolve against base path)
//!     → route.rs (handle keyed by full path)
//!     → Route::add_endpoint(method, handler, description, parameters)
//!     → registry.rs (uniqueness check, stage docs, Transport::bind)
//!     → docs.rs (publish new snapshot)
//!
//! Serving:
//!     GET <docs path> → DocsHandle::handler → latest snapshot as JSON
//! ```
//!
//! # Design Decisions
//! - Routes and endpoints are never removed or overwritten
//! - Every rejected registration leaves the registry unchanged
//! - Handlers are opaque; the registry never looks at requests

pub mod docs;
pub mod error;
pub mod method;
pub mod path;
pub mod registry;
pub mod route;

pub use docs::{params, DocsHandle, Documentation, EndpointDoc, ParamDocs, RouteDoc};
pub use error::{ApiError, ApiResult};
pub use method::HttpMethod;
pub use registry::Registry;
pub use route::Route;
