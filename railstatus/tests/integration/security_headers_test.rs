//! Integration Test: セキュリティヘッダー
//!
//! Every response carries the protective header set, whichever stage
//! produced it.

use axum::http::{Response, StatusCode};
use railstatus::api::security::DEFAULT_HEADERS;
use tower::ServiceExt;

use crate::support::app::{create_test_app, get};

fn assert_protective_headers<B>(response: &Response<B>) {
    for (name, value) in DEFAULT_HEADERS {
        assert_eq!(
            response.headers().get(*name).and_then(|v| v.to_str().ok()),
            Some(*value),
            "header {name} missing or wrong"
        );
    }
}

#[tokio::test]
async fn status_page_has_security_headers() {
    let app = create_test_app();
    let response = app.router.clone().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_protective_headers(&response);
}

#[tokio::test]
async fn forbidden_response_has_security_headers() {
    let app = create_test_app();
    let response = app.router.clone().oneshot(get("/other-path")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_protective_headers(&response);
}

#[tokio::test]
async fn static_asset_has_security_headers() {
    let app = create_test_app();
    let response = app
        .router
        .clone()
        .oneshot(get("/site.webmanifest"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_protective_headers(&response);
}
