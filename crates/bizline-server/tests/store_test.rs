use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bizline_server::config::Config;
use bizline_server::App;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn file_config(dir: &TempDir) -> Config {
    Config {
        database_url: format!("sqlite://{}", dir.path().join("business.db").display()),
        ..Config::in_memory()
    }
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let res = router.clone().oneshot(request).await.unwrap();
    let status = res.status();

    let body = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

async fn list_businesses(router: &Router) -> Value {
    let (status, json) = send(
        router,
        Request::builder()
            .uri("/api/businesses")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    json
}

#[tokio::test]
async fn test_reopening_store_keeps_existing_records() {
    let dir = tempfile::tempdir().unwrap();

    let first = App::new(file_config(&dir)).await.expect("first open");
    let (status, created) = send(
        &first.router(),
        Request::builder()
            .method("POST")
            .uri("/business-data")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "name": "Joe's Cafe", "location": "Austin" }).to_string(),
            ))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    first.store().close().await;

    let second = App::new(file_config(&dir)).await.expect("second open");
    second.store().initialize().await.expect("initialize again");

    assert_eq!(list_businesses(&second.router()).await, json!([created]));
}

#[tokio::test]
async fn test_unopenable_store_fails_startup() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        database_url: format!(
            "sqlite://{}",
            dir.path().join("missing").join("business.db").display()
        ),
        ..Config::in_memory()
    };

    let err = match App::new(config).await {
        Ok(_) => panic!("store in a missing directory should not open"),
        Err(e) => e,
    };
    assert!(format!("{err:#}").contains("failed to open business store"));
}
