mod common;

use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use snaplink::api::handlers::{delete_link_handler, list_links_handler};
use snaplink::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/links", get(list_links_handler))
        .route("/api/links/{code}", delete(delete_link_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_links_empty() {
    let server = server(common::create_seeded_state(&[]));

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!({}));
}

#[tokio::test]
async fn test_list_links_keeps_creation_order() {
    let server = server(common::create_seeded_state(&[
        ("zzz999", "https://z.com"),
        ("aaa111", "https://a.com"),
        ("mmm555", "https://m.com"),
    ]));

    let response = server.get("/api/links").await;

    response.assert_status_ok();

    let body = response.text();
    let z = body.find("zzz999").unwrap();
    let a = body.find("aaa111").unwrap();
    let m = body.find("mmm555").unwrap();
    assert!(z < a && a < m);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["aaa111"], "https://a.com");
}

#[tokio::test]
async fn test_delete_link_success() {
    let server = server(common::create_seeded_state(&[
        ("delete1", "https://example.com/1"),
        ("keep1", "https://example.com/2"),
    ]));

    let response = server.delete("/api/links/delete1").await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let json = server.get("/api/links").await.json::<serde_json::Value>();
    assert!(json.get("delete1").is_none());
    assert_eq!(json["keep1"], "https://example.com/2");
}

#[tokio::test]
async fn test_delete_link_not_found() {
    let server = server(common::create_seeded_state(&[]));

    let response = server.delete("/api/links/nonexistent").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_link_twice() {
    let server = server(common::create_seeded_state(&[("once", "https://example.com")]));

    server
        .delete("/api/links/once")
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .delete("/api/links/once")
        .await
        .assert_status_not_found();
}
