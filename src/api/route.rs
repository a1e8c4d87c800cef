//! Route handles.

use crate::api::docs::{ParamDocs, RouteDoc};
use crate::api::error::ApiResult;
use crate::api::method::HttpMethod;
use crate::api::registry::Registry;
use crate::transport::{Handler, Transport};

/// Handle to one declared route.
///
/// Holds the route's full path and a mutable borrow of the owning
/// registry; all writes go through the registry.
pub struct Route<'r, 't, T: Transport + ?Sized> {
    registry: &'r mut Registry<'t, T>,
    full_path: String,
}

impl<'r, 't, T: Transport + ?Sized> std::fmt::Debug for Route<'r, 't, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("full_path", &self.full_path)
            .finish_non_exhaustive()
    }
}

impl<'r, 't, T: Transport + ?Sized> Route<'r, 't, T> {
    pub(crate) fn new(registry: &'r mut Registry<'t, T>, full_path: String) -> Self {
        Self { registry, full_path }
    }

    /// Resolved path of this route.
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Register the handler for `method` without parameter docs.
    pub fn add_endpoint(
        &mut self,
        method: HttpMethod,
        handler: Handler,
        description: &str,
    ) -> ApiResult<()> {
        self.add_endpoint_with(method, handler, description, ParamDocs::new())
    }

    /// Register the handler for `method` and document its parameters.
    ///
    /// Fails with `DuplicateEndpoint` if `method` is already registered;
    /// the existing endpoint is never overwritten.
    pub fn add_endpoint_with(
        &mut self,
        method: HttpMethod,
        handler: Handler,
        description: &str,
        parameters: ParamDocs,
    ) -> ApiResult<()> {
        self.registry
            .add_endpoint(&self.full_path, method, handler, description, parameters)
    }

    /// Registered methods, in declaration order of [`HttpMethod`].
    pub fn methods(&self) -> Vec<HttpMethod> {
        self.doc()
            .map(|doc| doc.endpoints.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Documentation of this route.
    pub fn doc(&self) -> Option<&RouteDoc> {
        self.registry.route_doc(&self.full_path)
    }
}
