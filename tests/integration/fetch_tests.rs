use fetch_verdict::{
    ConfigError, FetchError, FetchStatus, Fetcher, FetcherConfig, Outcome, SkipReason, Validators,
};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_fetcher() -> Fetcher {
    let config = FetcherConfig::default().with_user_agent("TestBot/1.0");
    Fetcher::new(config).expect("Failed to build fetcher")
}

#[tokio::test]
async fn test_fetch_success_returns_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hello"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("hello")
                .insert_header("content-type", "text/plain"),
        )
        .mount(&mock_server)
        .await;

    let fetcher = create_test_fetcher();
    let result = fetcher
        .fetch(&format!("{}/hello", mock_server.uri()))
        .await
        .expect("fetch failed");

    assert_eq!(result.outcome(), &Outcome::Success);
    let response = result.response().expect("missing response");
    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), "hello");
    assert_eq!(response.content_type(), Some("text/plain"));
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "TestBot/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let result = create_test_fetcher()
        .fetch(&mock_server.uri())
        .await
        .expect("fetch failed");

    assert!(result.outcome().is_success());
}

#[tokio::test]
async fn test_fetch_service_unavailable_is_retryable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("try later"))
        .mount(&mock_server)
        .await;

    let result = create_test_fetcher()
        .fetch(&mock_server.uri())
        .await
        .expect("fetch failed");

    assert!(result.outcome().is_retryable());
    assert!(!result.outcome().is_timeout());
    assert!(result.outcome().reason().unwrap().contains("503"));
    assert!(result.response().is_none());
}

#[tokio::test]
async fn test_fetch_unauthorized_is_fatal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let result = create_test_fetcher()
        .fetch(&mock_server.uri())
        .await
        .expect("fetch failed");

    assert!(result.outcome().is_fatal());
    assert_eq!(result.outcome().status(), Some(FetchStatus::Http(401)));
    assert!(result.response().is_none());
}

#[tokio::test]
async fn test_fetch_not_found_and_gone_differ() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(410))
        .mount(&mock_server)
        .await;

    let fetcher = create_test_fetcher();
    let missing = fetcher
        .fetch(&format!("{}/missing", mock_server.uri()))
        .await
        .expect("fetch failed");
    let gone = fetcher
        .fetch(&format!("{}/gone", mock_server.uri()))
        .await
        .expect("fetch failed");

    assert!(missing.outcome().is_retryable());
    assert!(gone.outcome().is_fatal());
}

#[tokio::test]
async fn test_fetch_method_not_allowed_is_skip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(405).set_body_string("nope"))
        .mount(&mock_server)
        .await;

    let result = create_test_fetcher()
        .fetch(&mock_server.uri())
        .await
        .expect("fetch failed");

    assert_eq!(
        result.outcome(),
        &Outcome::Skip(SkipReason::ContentRejected { status: 405 })
    );
    assert!(result.response().is_none());
}

#[tokio::test]
async fn test_conditional_fetch_not_modified_is_skip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("if-none-match", "\"v1\""))
        .respond_with(ResponseTemplate::new(304))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("fresh")
                .insert_header("etag", "\"v1\""),
        )
        .mount(&mock_server)
        .await;

    let fetcher = create_test_fetcher();

    let first = fetcher
        .fetch(&mock_server.uri())
        .await
        .expect("first fetch failed");
    assert!(first.outcome().is_success());
    let validators = first.response().expect("missing response").validators();
    assert_eq!(validators.etag.as_deref(), Some("\"v1\""));

    let second = fetcher
        .fetch_conditional(&mock_server.uri(), &validators)
        .await
        .expect("conditional fetch failed");
    assert_eq!(second.outcome(), &Outcome::Skip(SkipReason::NotModified));
    assert!(second.response().is_none());
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301)
                .insert_header("location", format!("{}/new", mock_server.uri()).as_str()),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&mock_server)
        .await;

    let result = create_test_fetcher()
        .fetch(&format!("{}/old", mock_server.uri()))
        .await
        .expect("fetch failed");

    let response = result.response().expect("missing response");
    assert_eq!(response.url().path(), "/new");
    assert_eq!(response.text(), "moved");
}

#[tokio::test]
async fn test_fetch_timeout_is_timeout_class() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let config = FetcherConfig::default().with_timeout(Duration::from_millis(200));
    let fetcher = Fetcher::new(config).expect("Failed to build fetcher");

    let result = fetcher
        .fetch(&mock_server.uri())
        .await
        .expect("timeouts should not surface as errors");

    assert!(result.outcome().is_timeout());
    assert!(result.outcome().is_retryable());
    assert!(result.response().is_none());
}

#[tokio::test]
async fn test_fetch_rejected_url_is_unexpected() {
    let fetcher = create_test_fetcher();

    let err = fetcher
        .fetch("not a url")
        .await
        .expect_err("malformed URL should fail");
    assert!(matches!(err, FetchError::Unexpected { .. }));

    let err = fetcher
        .fetch("ftp://example.com/file")
        .await
        .expect_err("unsupported scheme should fail");
    assert!(matches!(err, FetchError::Unexpected { .. }));
}

#[tokio::test]
async fn test_concurrent_fetches_are_independent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/busy"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let fetcher = Arc::new(create_test_fetcher());
    let base = mock_server.uri();

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let fetcher = Arc::clone(&fetcher);
            let url = if i % 2 == 0 {
                format!("{}/ok", base)
            } else {
                format!("{}/busy", base)
            };
            tokio::spawn(async move { (i, fetcher.fetch(&url).await) })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.await.expect("task panicked");
        let result = result.expect("fetch failed");
        if i % 2 == 0 {
            assert!(result.outcome().is_success());
        } else {
            assert!(result.outcome().is_retryable());
        }
    }
}

#[tokio::test]
async fn test_validators_default_is_unconditional() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("if-none-match", "\"v1\""))
        .respond_with(ResponseTemplate::new(304))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("body"))
        .mount(&mock_server)
        .await;

    let result = create_test_fetcher()
        .fetch_conditional(&mock_server.uri(), &Validators::default())
        .await
        .expect("fetch failed");

    assert!(result.outcome().is_success());
}

#[tokio::test]
async fn test_fetch_unresolvable_host_is_timeout_class() {
    let fetcher = create_test_fetcher();

    let result = fetcher
        .fetch("http://no-such-host.invalid/")
        .await
        .expect("name resolution failures should not surface as errors");

    assert!(result.outcome().is_timeout());
    assert!(result.outcome().is_retryable());
    assert!(!result.outcome().is_fatal());
    assert_eq!(result.outcome().status(), Some(FetchStatus::Timeout));
    assert!(result
        .outcome()
        .reason()
        .unwrap()
        .starts_with("Name resolution failed for http://no-such-host.invalid/"));
    assert!(result.response().is_none());
}

#[test]
fn test_zero_timeout_is_rejected_at_construction() {
    let config = FetcherConfig::default().with_timeout(Duration::ZERO);

    let err = Fetcher::new(config).expect_err("zero timeout should be rejected");
    assert!(matches!(
        err,
        FetchError::Config(ConfigError::Validation(_))
    ));
}
