//! Documentation tree and the handler that serves it.
//!
//! # Wire Format
//! ```text
//! {
//!   "<full_path>": {
//!     "description": "...",
//!     "path_parameters": { "<name>": "<description>" },
//!     "GET": { "description": "...", "parameters": { ... } },
//!     ...only the methods actually registered
//!   }
//! }
//! ```
//!
//! # Design Decisions
//! - The registry owns the only mutable copy of the tree
//! - Readers see immutable snapshots published through `ArcSwap`
//! - Ordered maps keep the served document stable between requests

use std::collections::BTreeMap;
use std::sync::Arc;

use arc_swap::ArcSwap;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::api::method::HttpMethod;
use crate::transport::Handler;

/// Parameter name → description.
pub type ParamDocs = BTreeMap<String, String>;

/// Build a [`ParamDocs`] from `(name, description)` pairs.
pub fn params<I, K, V>(pairs: I) -> ParamDocs
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(name, description)| (name.into(), description.into()))
        .collect()
}

/// Documentation of one (route, method) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDoc {
    pub description: String,
    pub parameters: ParamDocs,
}

/// Documentation of one route and its registered endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDoc {
    pub description: String,
    pub path_parameters: ParamDocs,
    /// Keyed by the method's canonical token when serialized.
    #[serde(flatten)]
    pub endpoints: BTreeMap<HttpMethod, EndpointDoc>,
}

impl RouteDoc {
    pub(crate) fn new(description: String, path_parameters: ParamDocs) -> Self {
        Self {
            description,
            path_parameters,
            endpoints: BTreeMap::new(),
        }
    }
}

/// The full documentation tree, keyed by full route path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Documentation {
    routes: BTreeMap<String, RouteDoc>,
}

impl Documentation {
    /// Documentation for one route.
    pub fn get(&self, full_path: &str) -> Option<&RouteDoc> {
        self.routes.get(full_path)
    }

    /// Iterate over (full path, route documentation) pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteDoc)> {
        self.routes.iter().map(|(path, doc)| (path.as_str(), doc))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Pretty-printed JSON rendering of the tree.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub(crate) fn contains(&self, full_path: &str) -> bool {
        self.routes.contains_key(full_path)
    }

    pub(crate) fn get_mut(&mut self, full_path: &str) -> Option<&mut RouteDoc> {
        self.routes.get_mut(full_path)
    }

    pub(crate) fn insert(&mut self, full_path: String, doc: RouteDoc) {
        self.routes.insert(full_path, doc);
    }
}

/// Shared, read-only view of the most recently published documentation.
#[derive(Debug, Clone, Default)]
pub struct DocsHandle(Arc<ArcSwap<Documentation>>);

impl DocsHandle {
    /// Current snapshot.
    pub fn load(&self) -> Arc<Documentation> {
        self.0.load_full()
    }

    pub(crate) fn publish(&self, docs: Documentation) {
        self.0.store(Arc::new(docs));
    }

    /// Handler serving the current snapshot as `application/json`.
    pub fn handler(&self) -> Handler {
        let docs = self.clone();
        Handler::new(move |_req| {
            let snapshot = docs.load();
            async move { render(&snapshot) }
        })
    }
}

fn render(docs: &Documentation) -> Response {
    match docs.to_json_pretty() {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize API documentation");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
