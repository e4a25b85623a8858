use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use titanic::domain::config::Environment;
use titanic_server::Server;
use tower::ServiceExt;

/// Builds the application the way the test profile does: no listener, the
/// router is driven in-process.
fn test_app() -> axum::Router {
    Server::builder()
        .environment(Environment::Testing)
        .build()
        .expect("server should build")
        .router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

async fn body_string(body: Body) -> String {
    let bytes = to_bytes(body, usize::MAX).await.expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}

#[tokio::test]
async fn index_route_returns_welcome_message() {
    let response = test_app().oneshot(get("/")).await.expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("Welcome to the Titanic API"), "unexpected body: {body}");
}

#[tokio::test]
async fn index_route_is_idempotent() {
    let app = test_app();

    let first = app.clone().oneshot(get("/")).await.expect("router should respond");
    let second = app.oneshot(get("/")).await.expect("router should respond");

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    let first_body = body_string(first.into_body()).await;
    let second_body = body_string(second.into_body()).await;
    assert_eq!(first_body, second_body);
}
