//! Route registry: the owning collection of one API surface.
//!
//! # Responsibilities
//! - Resolve route paths against the base path
//! - Enforce unique routes and unique (route, method) endpoints
//! - Keep the documentation tree in step with what is bound
//! - Bind the introspection endpoint
//!
//! # Design Decisions
//! - The documentation tree is the route table; there is no second copy
//!   that could drift out of sync
//! - Route handles carry a key, and every write goes through the registry
//! - Registration needs `&mut self`, so setup is single-threaded by
//!   construction; serving reads published snapshots only
//! - A failed bind rolls back the staged documentation entry

use crate::api::docs::{DocsHandle, Documentation, EndpointDoc, ParamDocs, RouteDoc};
use crate::api::error::{ApiError, ApiResult};
use crate::api::method::HttpMethod;
use crate::api::path;
use crate::api::route::Route;
use crate::transport::{Handler, Transport};

/// Registry of routes, endpoints and their documentation.
///
/// Borrows the transport for its whole lifetime; the transport is not
/// owned and stays usable once the registry is dropped.
pub struct Registry<'t, T: Transport + ?Sized> {
    transport: &'t mut T,
    base_path: String,
    docs: Documentation,
    published: DocsHandle,
}

impl<'t, T: Transport + ?Sized> Registry<'t, T> {
    /// Create a registry binding into `transport` under `base_path`.
    pub fn new(transport: &'t mut T, base_path: &str) -> Self {
        let base_path = path::normalize_base(base_path);
        tracing::debug!(base_path = %base_path, "API registry created");
        Self {
            transport,
            base_path,
            docs: Documentation::default(),
            published: DocsHandle::default(),
        }
    }

    /// Normalized base path, ending with a separator unless empty.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Declare a route without path parameters.
    pub fn add_route(&mut self, path: &str, description: &str) -> ApiResult<Route<'_, 't, T>> {
        self.add_route_with(path, description, ParamDocs::new())
    }

    /// Declare a route, documenting its path parameters.
    ///
    /// Relative paths are prefixed with the base path; paths starting with
    /// `/` are used verbatim.
    pub fn add_route_with(
        &mut self,
        path: &str,
        description: &str,
        path_parameters: ParamDocs,
    ) -> ApiResult<Route<'_, 't, T>> {
        let full_path = path::resolve(&self.base_path, path)?;

        if self.docs.contains(&full_path) {
            tracing::warn!(path = %full_path, "Rejected duplicate route");
            return Err(ApiError::DuplicateRoute { path: full_path });
        }

        self.docs.insert(
            full_path.clone(),
            RouteDoc::new(description.to_string(), path_parameters),
        );
        self.publish();

        tracing::debug!(path = %full_path, "Route added");
        Ok(Route::new(self, full_path))
    }

    /// Handle to a previously declared route, by full path.
    pub fn route(&mut self, full_path: &str) -> Option<Route<'_, 't, T>> {
        if self.docs.contains(full_path) {
            Some(Route::new(self, full_path.to_string()))
        } else {
            None
        }
    }

    /// Bind a GET endpoint serving the documentation tree as JSON.
    ///
    /// The endpoint reflects routes added after this call. Returns the
    /// resolved path. Collisions with other bindings are left to the
    /// transport.
    pub fn add_docs_endpoint(&mut self, docs_path: &str) -> ApiResult<String> {
        let full_path = path::resolve(&self.base_path, docs_path)?;
        self.transport.bind_get(&full_path, self.published.handler())?;

        tracing::info!(path = %full_path, "Documentation endpoint bound");
        Ok(full_path)
    }

    /// The current documentation tree.
    pub fn documentation(&self) -> &Documentation {
        &self.docs
    }

    /// A read-only handle to the published documentation, for serving it
    /// elsewhere.
    pub fn docs_handle(&self) -> DocsHandle {
        self.published.clone()
    }

    /// Number of declared routes.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub(crate) fn route_doc(&self, full_path: &str) -> Option<&RouteDoc> {
        self.docs.get(full_path)
    }

    pub(crate) fn add_endpoint(
        &mut self,
        full_path: &str,
        method: HttpMethod,
        handler: Handler,
        description: &str,
        parameters: ParamDocs,
    ) -> ApiResult<()> {
        let Some(route) = self.docs.get_mut(full_path) else {
            return Err(ApiError::UnknownRoute {
                path: full_path.to_string(),
            });
        };

        if route.endpoints.contains_key(&method) {
            tracing::warn!(path = %full_path, method = %method, "Rejected duplicate endpoint");
            return Err(ApiError::DuplicateEndpoint {
                path: full_path.to_string(),
                method,
            });
        }

        route.endpoints.insert(
            method,
            EndpointDoc {
                description: description.to_string(),
                parameters,
            },
        );

        if let Err(e) = self.transport.bind(method, full_path, handler) {
            if let Some(route) = self.docs.get_mut(full_path) {
                route.endpoints.remove(&method);
            }
            tracing::warn!(
                path = %full_path,
                method = %method,
                error = %e,
                "Transport rejected endpoint"
            );
            return Err(e.into());
        }

        self.publish();
        tracing::debug!(path = %full_path, method = %method, "Endpoint added");
        Ok(())
    }

    fn publish(&self) {
        self.published.publish(self.docs.clone());
    }
}
