// src/tests/router_tests/pages_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, make_store};
use astra::{Body, Request};
use http::Method;

fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[test]
fn root_serves_the_app_shell() {
    let store = make_store("pages_root");

    let mut resp = handle(get("/"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "text/html; charset=utf-8"
    );

    let body = body_string(&mut resp);
    assert!(body.contains("Asuntovahti"));
    assert!(body.contains("add-listing-form"));
}

#[test]
fn serves_static_css_with_content_type() {
    let store = make_store("pages_css");

    let mut resp = handle(get("/static/main.css"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers()["Content-Type"], "text/css");
    assert!(body_string(&mut resp).contains(".listing-card"));
}

#[test]
fn serves_static_js_with_content_type() {
    let store = make_store("pages_js");

    let resp = handle(get("/static/app.js"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "text/javascript"
    );
}

#[test]
fn missing_asset_is_not_found() {
    let store = make_store("pages_missing_asset");

    let err = handle(get("/static/nope.css"), &store).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn asset_path_traversal_is_rejected() {
    let store = make_store("pages_traversal");

    let err = handle(get("/static/../Cargo.toml"), &store).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
