//! Request pipeline tests against a scripted transport, with paused time.

mod test_utils;

use scryer_client::ScryerClient;
use scryer_core::{Method, Route};
use scryer_error::{HttpErrorKind, ScryerErrorKind};
use scryer_interface::Transport;
use scryer_models::CardRequests;
use scryer_rate_limit::ScryerConfig;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use test_utils::{CARD_ID, MockReply, MockTransport, card_json, error_body};
use tokio::time::Instant;

fn client_with(transport: &Arc<MockTransport>) -> ScryerClient {
    let transport: Arc<dyn Transport> = transport.clone();
    ScryerClient::with_transport(transport, &ScryerConfig::default())
}

fn card_route(id: &str) -> Route {
    Route::get("/cards/{id}", [("id", id.into())]).unwrap()
}

#[tokio::test(start_paused = true)]
async fn success_returns_decoded_body() {
    let transport = Arc::new(MockTransport::new_sequence(vec![MockReply::ok(json!({"a": 1}))]));
    let client = client_with(&transport);

    let value = client.execute(&card_route("abc def"), None, None).await.unwrap();

    assert_eq!(value, json!({"a": 1}));
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(*requests[0].request.method(), Method::Get);
    assert_eq!(
        requests[0].request.url(),
        "https://api.scryfall.com/cards/abc%20def"
    );
}

#[tokio::test(start_paused = true)]
async fn rate_limited_call_cools_down_and_is_retried() {
    let transport = Arc::new(MockTransport::new_sequence(vec![
        MockReply::Status(429, error_body(429, "too_many_requests", "Slow down")),
        MockReply::ok(json!({"ok": true})),
    ]));
    let client = client_with(&transport);
    let start = Instant::now();

    let value = client.execute(&card_route(CARD_ID), None, None).await.unwrap();

    assert_eq!(value, json!({"ok": true}));
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].at, start);
    assert!(requests[1].at >= start + Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn server_errors_exhaust_retries_with_linear_backoff() {
    let transport = Arc::new(MockTransport::new_always(MockReply::Status(
        503,
        error_body(503, "unavailable", "Try again later"),
    )));
    let client = client_with(&transport);
    let start = Instant::now();

    let err = client
        .execute(&card_route(CARD_ID), None, None)
        .await
        .unwrap_err();

    let ScryerErrorKind::ExhaustedRetries(exhausted) = err.kind() else {
        panic!("expected exhausted retries, got {err}");
    };
    assert_eq!(exhausted.route, "GET /cards/{id}");
    assert_eq!(exhausted.attempts, 3);
    let last = exhausted.last_error.as_ref().expect("decodable 5xx body");
    assert_eq!(last.kind, HttpErrorKind::RemoteService);
    assert_eq!(last.envelope.code, "unavailable");

    let offsets: Vec<Duration> = transport
        .requests()
        .iter()
        .map(|recorded| recorded.at - start)
        .collect();
    assert_eq!(
        offsets,
        vec![
            Duration::ZERO,
            Duration::from_secs(1),
            Duration::from_secs(4)
        ]
    );
    assert_eq!(Instant::now() - start, Duration::from_secs(9));
}

#[tokio::test(start_paused = true)]
async fn undecodable_server_error_keeps_status_on_exhaustion() {
    let transport = Arc::new(MockTransport::new_always(MockReply::Status(
        502,
        "<html>Bad Gateway</html>".to_string(),
    )));
    let client = client_with(&transport);

    let err = client
        .execute(&card_route(CARD_ID), None, None)
        .await
        .unwrap_err();

    let ScryerErrorKind::ExhaustedRetries(exhausted) = err.kind() else {
        panic!("expected exhausted retries, got {err}");
    };
    let last = exhausted.last_error.as_ref().unwrap();
    assert_eq!(last.kind, HttpErrorKind::RemoteService);
    assert_eq!(last.status(), 502);
    assert_eq!(last.envelope.code, "unknown");
    assert_eq!(last.envelope.details, "<html>Bad Gateway</html>");
    assert_eq!(transport.call_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn not_found_raises_immediately() {
    let transport = Arc::new(MockTransport::new_always(MockReply::Status(
        404,
        error_body(404, "not_found", "No card found with the given ID"),
    )));
    let client = client_with(&transport);

    let err = client.get_card_by_id(CARD_ID).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(transport.call_count(), 1);
    let http = err.http().unwrap();
    assert_eq!(http.route, "GET /cards/{id}");
    assert!(
        err.to_string()
            .contains("404|not_found: No card found with the given ID")
    );
}

#[tokio::test(start_paused = true)]
async fn non_json_client_error_gets_a_synthesized_envelope() {
    let transport = Arc::new(MockTransport::new_sequence(vec![MockReply::Status(
        400,
        "<html>bad</html>".to_string(),
    )]));
    let client = client_with(&transport);

    let err = client
        .execute(&card_route(CARD_ID), None, None)
        .await
        .unwrap_err();

    let http = err.http().unwrap();
    assert_eq!(http.kind, HttpErrorKind::Request);
    assert_eq!(http.envelope.code, "unknown");
    assert_eq!(http.envelope.details, "<html>bad</html>");
}

#[tokio::test(start_paused = true)]
async fn transport_failure_is_retried_then_recovers() {
    let transport = Arc::new(MockTransport::new_sequence(vec![
        MockReply::Fail("connection refused".to_string()),
        MockReply::ok(json!({"ok": true})),
    ]));
    let client = client_with(&transport);
    let start = Instant::now();

    let value = client.execute(&card_route(CARD_ID), None, None).await.unwrap();

    assert_eq!(value, json!({"ok": true}));
    assert_eq!(transport.requests()[1].at - start, Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn transport_failure_on_last_attempt_surfaces() {
    let transport = Arc::new(MockTransport::new_always(MockReply::Fail(
        "connection refused".to_string(),
    )));
    let client = client_with(&transport);

    let err = client
        .execute(&card_route(CARD_ID), None, None)
        .await
        .unwrap_err();

    let ScryerErrorKind::Transport(transport_err) = err.kind() else {
        panic!("expected transport error, got {err}");
    };
    assert!(transport_err.message.contains("GET /cards/{id}"));
    assert!(transport_err.message.contains("connection refused"));
    assert_eq!(transport.call_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn invalid_success_body_is_a_json_error() {
    let transport = Arc::new(MockTransport::new_sequence(vec![MockReply::Status(
        200,
        "not json".to_string(),
    )]));
    let client = client_with(&transport);

    let err = client
        .execute(&card_route(CARD_ID), None, None)
        .await
        .unwrap_err();

    assert!(matches!(err.kind(), ScryerErrorKind::Json(_)));
}

#[tokio::test(start_paused = true)]
async fn overlong_query_never_reaches_the_transport() {
    let transport = Arc::new(MockTransport::new_always(MockReply::ok(json!({}))));
    let client = client_with(&transport);

    let err = client.search(&"x".repeat(1001)).await.unwrap_err();

    assert!(matches!(err.kind(), ScryerErrorKind::InvalidArgument(_)));
    assert_eq!(transport.call_count(), 0);
    assert_eq!(client.gate().remaining(), 10);
}

#[tokio::test(start_paused = true)]
async fn pagination_yields_next_page_then_none() -> anyhow::Result<()> {
    let next = "https://api.scryfall.com/cards/search?format=json&include_extras=false&include_multilingual=false&include_variations=false&order=name&page=2&q=angel&unique=cards";
    let transport = Arc::new(MockTransport::new_sequence(vec![
        MockReply::ok(json!({
            "object": "list",
            "total_cards": 2,
            "has_more": true,
            "next_page": next,
            "data": [card_json("Serra Angel")]
        })),
        MockReply::ok(json!({
            "object": "list",
            "total_cards": 2,
            "has_more": false,
            "data": [card_json("Angel of Mercy")]
        })),
    ]));
    let client = client_with(&transport);

    let first = client.search("angel").await?;
    let second = first.get_next_page().await?.expect("second page");
    assert_eq!(second.cards().next().map(|c| c.name.as_str()), Some("Angel of Mercy"));
    assert!(second.get_next_page().await?.is_none());

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    let query = requests[1].request.query();
    assert_eq!(requests[1].request.url(), "https://api.scryfall.com/cards/search");
    assert_eq!(query.get("page"), Some("2"));
    assert_eq!(query.get("q"), Some("angel"));
    assert_eq!(query.get("format"), None);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn burst_beyond_quota_waits_for_the_next_window() {
    let transport = Arc::new(MockTransport::new_always(MockReply::ok(json!({}))));
    let client = client_with(&transport);
    let start = Instant::now();
    let mut tasks = tokio::task::JoinSet::new();

    for _ in 0..15 {
        let client = client.clone();
        tasks.spawn(async move { client.execute(&card_route(CARD_ID), None, None).await });
    }
    while let Some(result) = tasks.join_next().await {
        result.unwrap().unwrap();
    }

    let delayed = transport
        .requests()
        .iter()
        .filter(|recorded| recorded.at >= start + Duration::from_secs(1))
        .count();
    assert!(delayed >= 5, "only {delayed} requests waited");
}

#[tokio::test]
async fn close_twice_without_requests() {
    let transport = Arc::new(MockTransport::new_sequence(Vec::new()));
    let client = client_with(&transport);

    client.close().await;
    client.close().await;

    assert_eq!(transport.close_count(), 2);
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn default_client_closes_cleanly() {
    let client = ScryerClient::new();
    client.close().await;
    client.close().await;
}

#[tokio::test(start_paused = true)]
async fn post_route_carries_json_body() {
    let transport = Arc::new(MockTransport::new_sequence(vec![MockReply::ok(json!({}))]));
    let client = client_with(&transport);
    let route = Route::fixed(Method::Post, "/cards/collection").unwrap();
    let body = json!({"identifiers": [{"id": CARD_ID}]});

    client.execute(&route, None, Some(&body)).await.unwrap();

    let recorded = &transport.requests()[0].request;
    assert_eq!(*recorded.method(), Method::Post);
    assert_eq!(recorded.body().as_ref(), Some(&body));
}
