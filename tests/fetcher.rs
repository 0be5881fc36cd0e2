use std::time::Duration;

use tag_scraper::error::AppError;
use tag_scraper::fetcher::{Fetcher, BROWSER_USER_AGENT};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(None).unwrap();
    let html = fetcher.fetch_html(&format!("{}/", server.uri())).await.unwrap();
    assert_eq!(html, "<p>ok</p>");

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0].headers.get("user-agent").unwrap();
    assert_eq!(user_agent.to_str().unwrap(), BROWSER_USER_AGENT);
}

#[tokio::test]
async fn client_error_status_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(None).unwrap();
    let err = fetcher.fetch_html(&server.uri()).await.unwrap_err();

    match err {
        AppError::FetchError(msg) => assert!(msg.contains("403 Forbidden"), "{msg}"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn failed_request_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(None).unwrap();
    assert!(fetcher.fetch_html(&server.uri()).await.is_err());
}

#[tokio::test]
async fn connection_refused_is_a_fetch_error() {
    let fetcher = Fetcher::new(None).unwrap();
    let err = fetcher.fetch_html("http://127.0.0.1:1/").await.unwrap_err();

    assert!(matches!(err, AppError::FetchError(_)));
}

#[tokio::test]
async fn configured_timeout_bounds_slow_servers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(Some(Duration::from_millis(200))).unwrap();
    let err = fetcher.fetch_html(&server.uri()).await.unwrap_err();

    assert!(matches!(err, AppError::FetchError(_)));
}

#[tokio::test]
async fn meta_declared_charset_is_honoured() {
    let server = MockServer::start().await;
    let body = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xE9</title></head>\
<body><p>na\xEFve</p></body></html>"
        .to_vec();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html"))
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(None).unwrap();
    let html = fetcher.fetch_html(&server.uri()).await.unwrap();

    assert!(html.contains("<title>Caf\u{e9}</title>"));
    assert!(html.contains("<p>na\u{ef}ve</p>"));
    assert!(!html.contains('\u{fffd}'));
}
