//! Tests for response decoding

use super::*;
use crate::error::{Error, ErrorEntry};
use crate::types::{Balance, TransactionRecord};
use serde_json::json;

#[test]
fn test_decode_full_envelope() {
    let body = json!({
        "errors": [{"field": "amount", "message": "invalid"}],
        "results": [
            {"date": "2024-01-02", "description": "a", "amount": 10, "status": "settled", "category": "x", "error": ""}
        ],
        "pages": {"next": "offset=10&limit=10", "previous": null}
    })
    .to_string();

    let envelope: Envelope<TransactionRecord> = decode_envelope(&body).unwrap();
    assert_eq!(
        envelope.errors.entries(),
        &[ErrorEntry::new("amount", "invalid")]
    );
    assert_eq!(envelope.results.len(), 1);
    assert_eq!(envelope.pages.next.as_deref(), Some("offset=10&limit=10"));
    assert!(envelope.pages.previous.is_none());
}

#[test]
fn test_decode_minimal_envelope() {
    let envelope: Envelope<TransactionRecord> = decode_envelope(r#"{"results": []}"#).unwrap();
    assert!(envelope.errors.is_empty());
    assert!(envelope.results.is_empty());
    assert_eq!(envelope.pages, PageLinks::default());
}

#[test]
fn test_decode_nulls() {
    let envelope: Envelope<TransactionRecord> =
        decode_envelope(r#"{"errors": null, "results": null, "pages": null}"#).unwrap();
    assert!(envelope.errors.is_empty());
    assert!(envelope.results.is_empty());
    assert_eq!(envelope.pages, PageLinks::default());
}

#[test]
fn test_decode_missing_results_is_error() {
    let err = decode_envelope::<TransactionRecord>(r#"{"errors": []}"#).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

#[test]
fn test_decode_invalid_json_is_error() {
    let err = decode_envelope::<Balance>("<html>Bad Gateway</html>").unwrap_err();
    assert!(err.is_decode());
    assert!(err.to_string().contains("<html>"));
}

#[test]
fn test_decode_bad_record_is_error() {
    let body = r#"{"results": [{"date": "2024-01-02", "amount": "ten", "status": "settled"}]}"#;
    let err = decode_envelope::<TransactionRecord>(body).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn test_decode_error_excerpt_is_bounded() {
    let body = "x".repeat(1000);
    let err = decode_envelope::<Balance>(&body).unwrap_err();
    assert!(err.to_string().len() < 400);
}
