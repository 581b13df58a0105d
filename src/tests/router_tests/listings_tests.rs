// src/tests/router_tests/listings_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, make_store, sample_listing};
use astra::{Body, Request};
use http::Method;

fn request(method: Method, uri: &str, body: Body) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
        .unwrap()
}

#[test]
fn lists_empty_store_as_empty_array() {
    let store = make_store("router_list_empty");

    let mut resp = handle(request(Method::GET, "/listings", Body::empty()), &store).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(&mut resp), "[]");
}

#[test]
fn lists_the_full_collection() {
    let store = make_store("router_list");
    store
        .save(&[
            sample_listing("a", "https://asunnot.example.fi/kohde/1"),
            sample_listing("b", "https://asunnot.example.fi/kohde/2"),
        ])
        .unwrap();

    let mut resp = handle(request(Method::GET, "/listings", Body::empty()), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let listings: Vec<serde_json::Value> =
        serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0]["id"], "a");
    assert_eq!(listings[0]["price"], "315 000 €");
    assert_eq!(listings[1]["id"], "b");
}

#[test]
fn add_with_existing_url_is_rejected_before_scraping() {
    let store = make_store("router_add_dup");
    let url = "https://asunnot.example.fi/kohde/123";
    store.save(&[sample_listing("a", url)]).unwrap();

    let payload = format!(r#"{{"url": "{url}"}}"#);
    let err = handle(
        request(Method::POST, "/add_listing", Body::from(payload)),
        &store,
    )
    .unwrap_err();

    assert!(matches!(err, ServerError::DuplicateListing));

    // Store untouched
    let listings = store.load().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, "a");
}

#[test]
fn add_rejects_a_non_json_body() {
    let store = make_store("router_add_garbage");

    let err = handle(
        request(
            Method::POST,
            "/add_listing",
            Body::from("definitely not json".to_string()),
        ),
        &store,
    )
    .unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn add_rejects_an_unparseable_url() {
    let store = make_store("router_add_bad_url");

    let err = handle(
        request(
            Method::POST,
            "/add_listing",
            Body::from(r#"{"url": "kohde 123"}"#.to_string()),
        ),
        &store,
    )
    .unwrap_err();

    assert!(matches!(err, ServerError::BadRequest(_)));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn delete_with_unknown_id_is_not_found() {
    let store = make_store("router_delete_missing");
    store
        .save(&[sample_listing("a", "https://asunnot.example.fi/kohde/1")])
        .unwrap();

    let err = handle(
        request(Method::DELETE, "/delete_listing/nope", Body::empty()),
        &store,
    )
    .unwrap_err();

    assert!(matches!(err, ServerError::ListingNotFound));
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn delete_removes_persists_and_returns_the_rest() {
    let store = make_store("router_delete");
    store
        .save(&[
            sample_listing("a", "https://asunnot.example.fi/kohde/1"),
            sample_listing("b", "https://asunnot.example.fi/kohde/2"),
        ])
        .unwrap();

    let mut resp = handle(
        request(Method::DELETE, "/delete_listing/a", Body::empty()),
        &store,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let remaining: Vec<serde_json::Value> =
        serde_json::from_str(&body_string(&mut resp)).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["id"], "b");

    let persisted = store.load().unwrap();
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id, "b");
}

#[test]
fn unknown_route_is_not_found() {
    let store = make_store("router_unknown");

    let err = handle(request(Method::GET, "/nope", Body::empty()), &store).unwrap_err();

    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn preflight_gets_cors_headers() {
    let store = make_store("router_preflight");

    let resp = handle(
        request(Method::OPTIONS, "/add_listing", Body::empty()),
        &store,
    )
    .unwrap();

    assert_eq!(resp.status(), 204);
    assert_eq!(
        resp.headers()["Access-Control-Allow-Origin"],
        "*"
    );
}

#[test]
fn listing_responses_allow_any_origin() {
    let store = make_store("router_cors");

    let resp = handle(request(Method::GET, "/listings", Body::empty()), &store).unwrap();

    assert_eq!(
        resp.headers()["Access-Control-Allow-Origin"],
        "*"
    );
}
