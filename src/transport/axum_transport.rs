//! Axum-backed transport.
//!
//! # Responsibilities
//! - Record (method, path) → handler bindings during setup
//! - Translate `:name` / `*name` path segments into axum's `{name}` syntax
//! - Refuse clashing bindings instead of panicking inside axum, including
//!   paths that differ only in parameter names (`/users/:id` vs `/users/:name`)
//! - Freeze the bindings into an `axum::Router`
//!
//! # Design Decisions
//! - Bindings are collected first and turned into a router once, so a
//!   rejected binding never leaves a half-built router behind
//! - One `MethodRouter` per path; axum answers 404/405 for the rest

use std::collections::BTreeMap;

use axum::body::Body;
use axum::http::Request;
use axum::routing::{MethodFilter, MethodRouter};
use axum::Router;

use crate::api::HttpMethod;
use crate::transport::{Handler, Transport, TransportError};

#[derive(Debug)]
struct PathBindings {
    /// Path as given by the caller, before translation.
    source: String,
    handlers: BTreeMap<HttpMethod, Handler>,
}

/// Collects bindings and builds an axum router from them.
#[derive(Debug, Default)]
pub struct AxumTransport {
    paths: BTreeMap<String, PathBindings>,
}

impl AxumTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// All (method, path) pairs bound so far, using the caller's path syntax.
    pub fn bindings(&self) -> Vec<(HttpMethod, &str)> {
        self.paths
            .values()
            .flat_map(|bound| {
                bound
                    .handlers
                    .keys()
                    .map(move |method| (*method, bound.source.as_str()))
            })
            .collect()
    }

    /// Build the router serving every bound handler.
    pub fn into_router(self) -> Router {
        self.paths
            .into_iter()
            .fold(Router::new(), |router, (path, bound)| {
                let method_router = bound
                    .handlers
                    .into_iter()
                    .fold(MethodRouter::new(), |methods, (method, handler)| {
                        methods.on(method_filter(method), move |req: Request<Body>| {
                            handler.call(req)
                        })
                    });
                router.route(&path, method_router)
            })
    }
}

impl Transport for AxumTransport {
    fn bind(
        &mut self,
        method: HttpMethod,
        path: &str,
        handler: Handler,
    ) -> Result<(), TransportError> {
        let axum_path = to_axum_path(path)?;

        if !self.paths.contains_key(&axum_path) {
            let shape = path_shape(&axum_path);
            if let Some((_, existing)) = self
                .paths
                .iter()
                .find(|(bound_path, _)| path_shape(bound_path) == shape)
            {
                return Err(TransportError::Overlap {
                    path: path.to_string(),
                    existing: existing.source.clone(),
                });
            }
        }

        let bound = self
            .paths
            .entry(axum_path)
            .or_insert_with(|| PathBindings {
                source: path.to_string(),
                handlers: BTreeMap::new(),
            });

        if bound.handlers.contains_key(&method) {
            return Err(TransportError::Conflict {
                method,
                path: path.to_string(),
            });
        }
        bound.handlers.insert(method, handler);

        tracing::debug!(method = %method, path = %path, "Handler bound");
        Ok(())
    }
}

fn method_filter(method: HttpMethod) -> MethodFilter {
    match method {
        HttpMethod::Get => MethodFilter::GET,
        HttpMethod::Post => MethodFilter::POST,
        HttpMethod::Put => MethodFilter::PUT,
        HttpMethod::Delete => MethodFilter::DELETE,
    }
}

/// Path with every parameter name blanked out: `/users/{id}` → `/users/{}`.
///
/// Axum refuses two routes with the same shape but different names.
fn path_shape(axum_path: &str) -> String {
    axum_path
        .split('/')
        .map(|segment| {
            if segment.starts_with("{*") {
                "{*}"
            } else if segment.starts_with('{') {
                "{}"
            } else {
                segment
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Translate `/users/:id` style paths into axum's `/users/{id}` syntax.
fn to_axum_path(path: &str) -> Result<String, TransportError> {
    let invalid = |reason: &str| TransportError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let Some(rest) = path.strip_prefix('/') else {
        return Err(invalid("path must start with '/'"));
    };

    let segments: Vec<&str> = rest.split('/').collect();
    let last = segments.len() - 1;
    let mut translated = Vec::with_capacity(segments.len());

    for (i, segment) in segments.into_iter().enumerate() {
        if segment.contains(['{', '}']) {
            return Err(invalid("braces are reserved, use :name or *name"));
        }
        if let Some(name) = segment.strip_prefix(':') {
            if name.is_empty() {
                return Err(invalid("empty parameter name"));
            }
            translated.push(format!("{{{}}}", name));
        } else if let Some(name) = segment.strip_prefix('*') {
            if name.is_empty() {
                return Err(invalid("empty wildcard name"));
            }
            if i != last {
                return Err(invalid("wildcard must be the last segment"));
            }
            translated.push(format!("{{*{}}}", name));
        } else {
            translated.push(segment.to_string());
        }
    }

    Ok(format!("/{}", translated.join("/")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use tower::ServiceExt;

    fn text(body: &'static str) -> Handler {
        Handler::new(move |_req| async move { body })
    }

    async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, String) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let res = router.oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_path_translation() {
        assert_eq!(to_axum_path("/api/test").unwrap(), "/api/test");
        assert_eq!(to_axum_path("/api/users/:id").unwrap(), "/api/users/{id}");
        assert_eq!(to_axum_path("/files/*rest").unwrap(), "/files/{*rest}");
        assert_eq!(to_axum_path("/").unwrap(), "/");
    }

    #[test]
    fn test_path_translation_rejects_bad_paths() {
        assert!(matches!(to_axum_path("api/test"), Err(TransportError::InvalidPath { .. })));
        assert!(matches!(to_axum_path("/users/:"), Err(TransportError::InvalidPath { .. })));
        assert!(matches!(to_axum_path("/users/{id}"), Err(TransportError::InvalidPath { .. })));
        assert!(matches!(
            to_axum_path("/files/*rest/more"),
            Err(TransportError::InvalidPath { .. })
        ));
    }

    #[test]
    fn test_conflicting_binding() {
        let mut transport = AxumTransport::new();
        transport.bind(HttpMethod::Get, "/api/test", text("a")).unwrap();
        transport.bind(HttpMethod::Post, "/api/test", text("b")).unwrap();

        let err = transport
            .bind(HttpMethod::Get, "/api/test", text("c"))
            .unwrap_err();
        assert_eq!(
            err,
            TransportError::Conflict {
                method: HttpMethod::Get,
                path: "/api/test".into(),
            }
        );
        assert_eq!(
            transport.bindings(),
            vec![(HttpMethod::Get, "/api/test"), (HttpMethod::Post, "/api/test")]
        );
    }

    #[test]
    fn test_parameter_name_clash() {
        let mut transport = AxumTransport::new();
        transport.bind(HttpMethod::Get, "/api/users/:id", text("get")).unwrap();

        let err = transport
            .bind(HttpMethod::Post, "/api/users/:name", text("post"))
            .unwrap_err();
        assert_eq!(
            err,
            TransportError::Overlap {
                path: "/api/users/:name".into(),
                existing: "/api/users/:id".into(),
            }
        );

        transport.bind(HttpMethod::Get, "/files/*rest", text("a")).unwrap();
        let err = transport
            .bind(HttpMethod::Put, "/files/*path", text("b"))
            .unwrap_err();
        assert!(matches!(err, TransportError::Overlap { .. }));

        // Same names on the same path and static siblings are fine
        transport.bind(HttpMethod::Put, "/api/users/:id", text("put")).unwrap();
        transport.bind(HttpMethod::Get, "/api/users/me", text("me")).unwrap();

        // Building the router must not panic
        let _router = transport.into_router();
    }

    #[test]
    fn test_path_shape() {
        assert_eq!(path_shape("/api/users/{id}"), "/api/users/{}");
        assert_eq!(path_shape("/files/{*rest}"), "/files/{*}");
        assert_eq!(path_shape("/api/test"), "/api/test");
    }

    #[tokio::test]
    async fn test_router_dispatch() {
        let mut transport = AxumTransport::new();
        transport.bind(HttpMethod::Get, "/api/test", text("get test")).unwrap();
        transport.bind(HttpMethod::Delete, "/api/test", text("delete test")).unwrap();
        transport.bind(HttpMethod::Get, "/api/other", text("get other")).unwrap();
        transport.bind(HttpMethod::Get, "/api/users/:id", text("user")).unwrap();
        let router = transport.into_router();

        let ok = |body: &str| (StatusCode::OK, body.to_string());
        assert_eq!(send(router.clone(), "GET", "/api/test").await, ok("get test"));
        assert_eq!(send(router.clone(), "DELETE", "/api/test").await, ok("delete test"));
        assert_eq!(send(router.clone(), "GET", "/api/users/42").await, ok("user"));

        let (status, _) = send(router.clone(), "PUT", "/api/test").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        let (status, _) = send(router, "GET", "/api/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
