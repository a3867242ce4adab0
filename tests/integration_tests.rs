//! Integration tests using mock HTTP server
//!
//! Tests the full end-to-end flow: Client → HTTP requests → decoded pages

use chrono::NaiveDate;
use serde_json::{json, Value};
use seed_client::http::CLIENT_VERSION_HEADER;
use seed_client::{Client, ClientConfig, Error, ErrorEntry, TransactionStatus};
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    let config = ClientConfig::builder("test-token")
        .base_url(server.uri())
        .client_version("2024-06-01")
        .no_rate_limit()
        .build();
    Client::new(config).unwrap()
}

fn record(day: u32, description: &str) -> Value {
    json!({
        "date": format!("2024-02-{day:02}"),
        "description": description,
        "amount": i64::from(day) * 100,
        "error": "",
        "status": "settled",
        "category": "general"
    })
}

/// Three pages of two records each, linked both ways
async fn mount_three_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/transactions/"))
        .and(query_param_is_missing("offset"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "results": [record(1, "p1-a"), record(2, "p1-b")],
            "pages": {"next": "offset=2&limit=2"}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/transactions/"))
        .and(query_param("offset", "2"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{"field": "amount", "message": "invalid"}],
            "results": [record(3, "p2-a"), record(4, "p2-b")],
            "pages": {"next": "offset=4&limit=2", "previous": "offset=0&limit=2"}
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/transactions/"))
        .and(query_param("offset", "4"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "results": [record(5, "p3-a")],
            "pages": {"previous": "offset=2&limit=2"}
        })))
        .mount(server)
        .await;
}

fn descriptions(records: &[seed_client::TransactionRecord]) -> Vec<String> {
    records.iter().map(|r| r.description.clone()).collect()
}

// ============================================================================
// Transactions
// ============================================================================

#[tokio::test]
async fn test_walk_forward_and_back() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = client_for(&server);
    let mut iter = client.transactions().batch_size(2).iterator();

    let (records, _) = iter.next().await.unwrap();
    let first_page = descriptions(records);
    assert_eq!(first_page, vec!["p1-a", "p1-b"]);
    assert!(!iter.has_previous());

    let (records, errors) = iter.next().await.unwrap();
    assert_eq!(descriptions(records), vec!["p2-a", "p2-b"]);
    assert_eq!(errors.entries(), &[ErrorEntry::new("amount", "invalid")]);

    let (records, _) = iter.next().await.unwrap();
    assert_eq!(descriptions(records), vec!["p3-a"]);
    assert!(!iter.has_next());
    assert!(iter.has_previous());

    let (records, _) = iter.previous().await.unwrap();
    assert_eq!(descriptions(records), vec!["p2-a", "p2-b"]);

    let (records, _) = iter.previous().await.unwrap();
    assert_eq!(descriptions(records), first_page);
    assert!(!iter.has_previous());
    assert!(iter.has_next());
}

#[tokio::test]
async fn test_exhausted_iterator_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "results": [record(1, "only")],
            "pages": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut iter = client.transactions().iterator();

    iter.next().await.unwrap();
    assert!(!iter.has_next());

    let (records, errors) = iter.next().await.unwrap();
    assert!(records.is_empty());
    assert!(errors.is_empty());
    assert!(!iter.has_next());
}

#[tokio::test]
async fn test_filters_and_headers_on_the_wire() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/"))
        .and(header("Authorization", "Bearer test-token"))
        .and(header(CLIENT_VERSION_HEADER, "2024-06-01"))
        .and(query_param("checking_account_id", "acc-42"))
        .and(query_param("status", "pending"))
        .and(query_param("start_date", "2024-02-01"))
        .and(query_param("end_date", "2024-03-01"))
        .and(query_param("limit", "50"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": null,
            "results": [],
            "pages": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut iter = client
        .transactions()
        .account_id("acc-42")
        .status(TransactionStatus::Pending)
        .start_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .batch_size(50)
        .iterator();

    let (records, errors) = iter.next().await.unwrap();
    assert!(records.is_empty());
    assert!(errors.is_empty());
}

#[tokio::test]
async fn test_http_failure_keeps_last_good_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "results": [record(1, "kept")],
            "pages": {"next": "offset=1&limit=1"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/transactions/"))
        .and(query_param("offset", "1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut iter = client.transactions().batch_size(1).iterator();
    iter.next().await.unwrap();

    let err = iter.next().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));

    assert!(iter.has_next());
    assert_eq!(descriptions(iter.records()), vec!["kept"]);
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/transactions/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut iter = client.transactions().iterator();

    let err = iter.next().await.unwrap_err();
    assert!(err.is_decode());
    assert!(!err.is_transport());
    assert!(!iter.has_fetched());
}

#[tokio::test]
async fn test_fetch_all() {
    let server = MockServer::start().await;
    mount_three_pages(&server).await;

    let client = client_for(&server);
    let (records, errors) = client
        .transactions()
        .batch_size(2)
        .fetch_all()
        .await
        .unwrap();

    assert_eq!(
        descriptions(&records),
        vec!["p1-a", "p1-b", "p2-a", "p2-b", "p3-a"]
    );
    assert_eq!(errors.len(), 1);
}

// ============================================================================
// Balance
// ============================================================================

#[tokio::test]
async fn test_balance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [],
            "results": [{
                "checking_account_id": "acc-1",
                "total_available": 12000,
                "settled": 15000,
                "pending_credits": 500,
                "pending_debits": 2000,
                "scheduled_debits": 1000,
                "accessible": 15000,
                "lockbox": 250
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let balance = client.balance().get().await.unwrap();

    assert_eq!(balance.checking_account_id, "acc-1");
    assert_eq!(balance.total_available, 12000);
    assert_eq!(balance.pending_credits, 500);
    assert_eq!(balance.lockbox, 250);
}

#[tokio::test]
async fn test_balance_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/balance"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.balance().get().await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 401, .. }));
}

#[test]
fn test_client_requires_token() {
    let err = Client::new(ClientConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}
