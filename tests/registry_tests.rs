//! End-to-end tests: registry → axum transport → real TCP server.

use axum::http::StatusCode;
use restdoc::api::{params, ApiError, HttpMethod, Registry};
use restdoc::transport::{AxumTransport, Handler, TransportError};
use serde_json::Value;

mod common;
use common::{client, TestServer};

fn text(body: &'static str) -> Handler {
    Handler::new(move |_req| async move { body })
}

#[tokio::test]
async fn test_add_route_and_endpoint() {
    let mut transport = AxumTransport::new();
    let mut api = Registry::new(&mut transport, "/api");
    api.add_route("test", "Test route")
        .unwrap()
        .add_endpoint(HttpMethod::Get, text("hello"), "Get endpoint")
        .unwrap();
    api.add_route("other", "Other route")
        .unwrap()
        .add_endpoint(HttpMethod::Get, text("other"), "Other endpoint")
        .unwrap();
    drop(api);

    let server = TestServer::start(transport.into_router()).await;
    let res = client().get(server.url("/api/test")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await.unwrap(), "hello");
}

#[tokio::test]
async fn test_docs_generation() {
    let mut transport = AxumTransport::new();
    let mut api = Registry::new(&mut transport, "/api");
    api.add_route("test", "Test route")
        .unwrap()
        .add_endpoint(HttpMethod::Get, text(""), "Get endpoint")
        .unwrap();
    assert_eq!(api.add_docs_endpoint("docs").unwrap(), "/api/docs");
    drop(api);

    let server = TestServer::start(transport.into_router()).await;
    let res = client().get(server.url("/api/docs")).send().await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.headers()["content-type"], "application/json");

    let json: Value = res.json().await.unwrap();
    assert_eq!(json["/api/test"]["description"], "Test route");
    assert_eq!(json["/api/test"]["GET"]["description"], "Get endpoint");
    assert!(json["/api/test"].get("POST").is_none());
}

#[tokio::test]
async fn test_path_parameters_in_docs() {
    let mut transport = AxumTransport::new();
    let mut api = Registry::new(&mut transport, "/api");
    api.add_route_with("users/:id", "User route", params([("id", "User ID")]))
        .unwrap()
        .add_endpoint(HttpMethod::Get, text("user"), "Get user")
        .unwrap();
    api.add_docs_endpoint("docs").unwrap();
    drop(api);

    let server = TestServer::start(transport.into_router()).await;

    let json: Value = client()
        .get(server.url("/api/docs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["/api/users/:id"]["path_parameters"]["id"], "User ID");

    // The parameterised route itself is reachable
    let res = client().get(server.url("/api/users/7")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "user");
}

#[tokio::test]
async fn test_docs_reflect_routes_added_after_binding() {
    let mut transport = AxumTransport::new();
    let mut api = Registry::new(&mut transport, "/api");
    api.add_docs_endpoint("/docs").unwrap();

    let mut late = api.add_route("late", "Added after docs").unwrap();
    late.add_endpoint(HttpMethod::Post, text("ok"), "Create").unwrap();
    late.add_endpoint_with(HttpMethod::Put, text("ok"), "Replace", params([("body", "Payload")]))
        .unwrap();
    drop(api);

    let server = TestServer::start(transport.into_router()).await;
    let json: Value = client()
        .get(server.url("/docs"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["/api/late"]["POST"]["description"], "Create");
    assert_eq!(json["/api/late"]["PUT"]["parameters"]["body"], "Payload");
}

#[tokio::test]
async fn test_absolute_route_outside_base_path() {
    let mut transport = AxumTransport::new();
    let mut api = Registry::new(&mut transport, "/api");
    api.add_route("/non_api/stuff", "Random thingy")
        .unwrap()
        .add_endpoint(HttpMethod::Delete, text("gone"), "Delete stuff")
        .unwrap();
    drop(api);

    let server = TestServer::start(transport.into_router()).await;
    let client = client();

    let res = client.delete(server.url("/non_api/stuff")).send().await.unwrap();
    assert_eq!(res.text().await.unwrap(), "gone");

    let res = client.delete(server.url("/api/non_api/stuff")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.get(server.url("/non_api/stuff")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[test]
fn test_registration_errors() {
    let mut transport = AxumTransport::new();
    let mut api = Registry::new(&mut transport, "/api");

    assert!(matches!(api.add_route("", "Empty"), Err(ApiError::EmptyPath)));

    let mut route = api.add_route("test", "Test route").unwrap();
    route.add_endpoint(HttpMethod::Get, text("a"), "Get endpoint").unwrap();
    assert!(matches!(
        route.add_endpoint(HttpMethod::Get, text("b"), "Duplicate"),
        Err(ApiError::DuplicateEndpoint { .. })
    ));
    assert!(matches!(
        api.add_route("test", "Duplicate"),
        Err(ApiError::DuplicateRoute { .. })
    ));

    // A docs endpoint on an already bound (path, GET) is refused by the transport
    assert!(matches!(
        api.add_docs_endpoint("test"),
        Err(ApiError::Transport(TransportError::Conflict { .. }))
    ));
    drop(api);

    assert_eq!(transport.bindings(), vec![(HttpMethod::Get, "/api/test")]);
}
