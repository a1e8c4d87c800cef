//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check paths have a shape the registry can resolve
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["pretty", "compact"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "api.base_path").
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut fail = |field, message: String| errors.push(ValidationError { field, message });

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        fail(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        );
    }

    let base = &config.api.base_path;
    if !base.is_empty() && !base.starts_with('/') {
        fail("api.base_path", format!("'{}' must start with '/'", base));
    }

    if let Some(docs_path) = &config.api.docs_path {
        if docs_path.is_empty() {
            fail("api.docs_path", "must not be empty".to_string());
        }
    }

    if config.timeouts.request_secs == 0 {
        fail("timeouts.request_secs", "must be greater than zero".to_string());
    }

    let level = config.observability.log_level.as_str();
    if !LOG_LEVELS.contains(&level) {
        fail("observability.log_level", format!("unknown level '{}'", level));
    }

    let format = config.observability.log_format.as_str();
    if !LOG_FORMATS.contains(&format) {
        fail("observability.log_format", format!("unknown format '{}'", format));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
