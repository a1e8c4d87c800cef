//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! registry, transport, http server
//!     → tracing events (registration, binding, lifecycle)
//!     → logging.rs (subscriber with env filter)
//!     → stdout
//!
//! Per request:
//!     → tower-http TraceLayer spans, tagged with x-request-id
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (path, method, error)
//! - RUST_LOG overrides the configured level

pub mod logging;
