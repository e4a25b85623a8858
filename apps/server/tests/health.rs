use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use titanic::domain::config::Environment;
use titanic_server::Server;
use tower::ServiceExt;

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

#[tokio::test]
async fn app_is_running() {
    let response = test_app().oneshot(get("/")).await.expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn health_check_reports_up() {
    let response = test_app().oneshot(get("/health")).await.expect("router should respond");

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body should be readable");
    let json: serde_json::Value = serde_json::from_slice(&bytes).expect("health body should be JSON");
    assert_eq!(json["status"], "up");
}
