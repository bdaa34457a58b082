//! Integration tests for the refresh/analyze orchestration using wiremock.
//!
//! These cover the end-to-end contracts: the loading phase resolves exactly
//! once per accepted cycle regardless of outcome, failures commit no partial
//! data, and analyzer results are stored verbatim and overwritten by the next
//! call.

use std::sync::Mutex;

use pulsedash_client::types::Sentiment;
use pulsedash_client::AnalyticsClient;
use pulsedash_core::store::{DashboardPhase, DashboardStore};
use pulsedash_core::{run_analysis, run_refresh};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> AnalyticsClient {
    AnalyticsClient::with_base_url(30, base_url).expect("client construction should not fail")
}

async fn mount_get(server: &MockServer, endpoint: &str, data: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/analytics/{endpoint}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true, "data": data })),
        )
        .mount(server)
        .await;
}

async fn mount_overview_family(server: &MockServer) {
    mount_get(
        server,
        "overview",
        serde_json::json!({
            "total_posts": 50,
            "total_engagement": 38_420,
            "avg_sentiment_score": 0.12,
            "sentiment_distribution": { "positive": 21, "negative": 13, "neutral": 16 },
            "platform_stats": {}
        }),
    )
    .await;
    mount_get(server, "sentiment", serde_json::json!({ "timeline": [], "recent_posts": [] }))
        .await;
    mount_get(
        server,
        "trending",
        serde_json::json!([{ "tag": "#AI", "count": 1250, "growth": 15.5 }]),
    )
    .await;
    mount_get(
        server,
        "engagement",
        serde_json::json!([
            { "date": "2026-08-30", "likes": 1540, "shares": 420, "comments": 210, "reach": 15_000 }
        ]),
    )
    .await;
}

async fn mount_analyze(server: &MockServer, data: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/analytics/analyze"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true, "data": data })),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn refresh_success_resolves_loading_and_commits_bundle() {
    let server = MockServer::start().await;
    mount_overview_family(&server).await;

    let client = test_client(&server.uri());
    let store = Mutex::new(DashboardStore::new());
    assert!(store.lock().unwrap().is_loading());

    let accepted = run_refresh(&client, &store).await;
    assert!(accepted);

    let store = store.into_inner().unwrap();
    assert!(!store.is_loading());
    assert!(!store.refresh_in_flight());
    let bundle = store.bundle().expect("bundle committed");
    assert_eq!(bundle.overview.total_posts, 50);
    assert_eq!(bundle.trending.len(), 1);
    assert_eq!(bundle.engagement.len(), 1);
}

#[tokio::test]
async fn refresh_failure_resolves_loading_without_partial_data() {
    let server = MockServer::start().await;
    // Three endpoints answer, the fourth fails: all-or-nothing means no
    // partial bundle may be committed.
    mount_get(&server, "sentiment", serde_json::json!({ "timeline": [], "recent_posts": [] }))
        .await;
    mount_get(&server, "trending", serde_json::json!([])).await;
    mount_get(&server, "engagement", serde_json::json!([])).await;
    Mock::given(method("GET"))
        .and(path("/analytics/overview"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let store = Mutex::new(DashboardStore::new());

    let accepted = run_refresh(&client, &store).await;
    assert!(accepted, "a failing cycle is still an accepted cycle");

    let store = store.into_inner().unwrap();
    assert!(!store.is_loading(), "loading must clear on failure too");
    assert!(!store.refresh_in_flight());
    assert!(store.bundle().is_none(), "no partial results committed");
    assert!(matches!(store.phase(), DashboardPhase::Failed(_)));
}

#[tokio::test]
async fn refresh_is_rejected_while_another_is_in_flight() {
    let server = MockServer::start().await;
    mount_overview_family(&server).await;

    let client = test_client(&server.uri());
    let store = Mutex::new(DashboardStore::new());
    // Claim the slot as an unresolved first cycle would.
    assert!(store.lock().unwrap().begin_refresh());

    let accepted = run_refresh(&client, &store).await;
    assert!(!accepted);
    assert!(store.lock().unwrap().is_loading(), "rejected call changes nothing");
}

#[tokio::test]
async fn analysis_result_is_stored_verbatim() {
    let server = MockServer::start().await;
    mount_analyze(
        &server,
        serde_json::json!({ "sentiment": "positive", "score": 0.87, "confidence": 91.0 }),
    )
    .await;

    let client = test_client(&server.uri());
    let store = Mutex::new(DashboardStore::new());

    let accepted = run_analysis(&client, &store, "I love this!").await;
    assert!(accepted);

    let store = store.into_inner().unwrap();
    let result = store.analysis().expect("result stored");
    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!((result.score - 0.87).abs() < f64::EPSILON);
    assert!((result.confidence - 91.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn second_analysis_overwrites_the_first() {
    let server = MockServer::start().await;
    mount_analyze(
        &server,
        serde_json::json!({ "sentiment": "positive", "score": 0.87, "confidence": 91.0 }),
    )
    .await;

    let client = test_client(&server.uri());
    let store = Mutex::new(DashboardStore::new());
    run_analysis(&client, &store, "I love this!").await;

    server.reset().await;
    mount_analyze(
        &server,
        serde_json::json!({ "sentiment": "negative", "score": -0.62, "confidence": 74.0 }),
    )
    .await;
    run_analysis(&client, &store, "Terrible experience.").await;

    let store = store.into_inner().unwrap();
    let result = store.analysis().expect("result stored");
    assert_eq!(result.sentiment, Sentiment::Negative);
    assert!((result.score + 0.62).abs() < f64::EPSILON);
}

#[tokio::test]
async fn failed_analysis_keeps_previous_result() {
    let server = MockServer::start().await;
    mount_analyze(
        &server,
        serde_json::json!({ "sentiment": "positive", "score": 0.87, "confidence": 91.0 }),
    )
    .await;

    let client = test_client(&server.uri());
    let store = Mutex::new(DashboardStore::new());
    run_analysis(&client, &store, "I love this!").await;

    server.reset().await;
    Mock::given(method("POST"))
        .and(path("/analytics/analyze"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let accepted = run_analysis(&client, &store, "anything").await;
    assert!(accepted);

    let store = store.into_inner().unwrap();
    assert!(!store.analysis_in_flight());
    let result = store.analysis().expect("previous result kept");
    assert_eq!(result.sentiment, Sentiment::Positive);
}

#[tokio::test]
async fn whitespace_only_analysis_is_skipped_without_a_request() {
    let server = MockServer::start().await;

    let client = test_client(&server.uri());
    let store = Mutex::new(DashboardStore::new());

    let accepted = run_analysis(&client, &store, "  \t ").await;
    assert!(!accepted);

    let requests = server.received_requests().await.unwrap_or_default();
    assert!(requests.is_empty(), "no request should reach the wire");
    assert!(store.into_inner().unwrap().analysis().is_none());
}
