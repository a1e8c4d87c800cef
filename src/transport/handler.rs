//! Type-erased request handlers.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;

type HandlerFn = dyn Fn(Request<Body>) -> BoxFuture<'static, Response> + Send + Sync;

/// An opaque async request handler.
///
/// Cloning is cheap; clones share the same underlying function.
#[derive(Clone)]
pub struct Handler(Arc<HandlerFn>);

impl Handler {
    /// Wrap an async function taking the raw request.
    pub fn new<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse,
    {
        Self(Arc::new(move |req: Request<Body>| -> BoxFuture<'static, Response> {
            let fut = f(req);
            Box::pin(async move { fut.await.into_response() })
        }))
    }

    /// Invoke the handler.
    pub fn call(&self, req: Request<Body>) -> BoxFuture<'static, Response> {
        (self.0)(req)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}
