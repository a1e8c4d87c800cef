//! Path normalization and resolution.
//!
//! Relative paths hang off the registry's base path; a leading separator
//! opts a route out of the base path entirely.

use crate::api::error::{ApiError, ApiResult};

/// Path separator.
pub const SEPARATOR: char = '/';

/// Normalize a base path so that it ends with exactly one separator.
///
/// An empty base stays empty.
pub fn normalize_base(base: &str) -> String {
    if base.is_empty() {
        return String::new();
    }
    let mut normalized = base.trim_end_matches(SEPARATOR).to_string();
    normalized.push(SEPARATOR);
    normalized
}

/// Resolve `path` against a normalized base path.
pub fn resolve(base: &str, path: &str) -> ApiResult<String> {
    if path.is_empty() {
        return Err(ApiError::EmptyPath);
    }
    if path.starts_with(SEPARATOR) {
        Ok(path.to_string())
    } else {
        Ok(format!("{}{}", base, path))
    }
}
