use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use titanic_kernel::server::router::system_router;
use tower::ServiceExt;

fn app() -> axum::Router {
    let (router, _api) = system_router::<()>().split_for_parts();
    router
}

async fn body_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

#[tokio::test]
async fn welcome_route_returns_welcome_message() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("Welcome to the Titanic API"), "unexpected body: {body}");
}

#[tokio::test]
async fn health_route_reports_up() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store, no-cache, must-revalidate")
    );

    let body = body_string(response.into_body()).await;
    let json: serde_json::Value = serde_json::from_str(&body).expect("health body should be JSON");
    assert_eq!(json["status"], "up");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = app()
        .oneshot(Request::builder().uri("/missing").body(Body::empty()).expect("request"))
        .await
        .expect("router should respond");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
