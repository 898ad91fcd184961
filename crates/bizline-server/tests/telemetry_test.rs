use bizline_server::config::Config;
use bizline_server::telemetry;
use opentelemetry::global;
use opentelemetry::trace::{Span, Tracer};

#[tokio::test(flavor = "multi_thread")]
async fn test_otlp_provider_is_registered_globally() {
    let config = Config {
        otlp_endpoint: Some("http://127.0.0.1:4317".into()),
        ..Config::in_memory()
    };

    telemetry::init(&config).expect("telemetry init");

    let mut span = global::tracer("bizline-test").start("startup");
    assert!(span.is_recording());
    span.end();

    tokio::task::spawn_blocking(telemetry::shutdown)
        .await
        .expect("shutdown");
}
