//! In-process dispatch through the root-mounted router. No sockets are bound.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use depsmoke_api::{app, mount_root};
use tower::ServiceExt;

async fn status_of(router: Router, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap().status()
}

#[tokio::test]
async fn empty_router_answers_not_found_at_root() {
    assert_eq!(status_of(app(), "/").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_router_answers_not_found_below_root() {
    assert_eq!(status_of(app(), "/a/b/c").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mounted_router_receives_requests() {
    let inner = Router::new().route("/ping", get(|| async { "pong" }));
    let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();

    let response = mount_root(inner).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .unwrap();
    assert_eq!(&body[..], b"pong");
}

#[tokio::test]
async fn mounted_router_keeps_full_path() {
    let inner = Router::new().route("/nested/path", get(|| async { "deep" }));
    assert_eq!(status_of(mount_root(inner.clone()), "/nested/path").await, StatusCode::OK);
    assert_eq!(status_of(mount_root(inner), "/path").await, StatusCode::NOT_FOUND);
}
