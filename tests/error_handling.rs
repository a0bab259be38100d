//! Behavior-driven tests for failure classification
//!
//! Each test scripts one misbehaving service response and checks the single
//! classified error a caller receives from `PriceLookup::lookup`.

use std::sync::Arc;

use bitstatus_core::{
    Endpoint, HttpError, HttpResponse, LookupError, LookupErrorKind, PriceLookup,
    ScriptedHttpClient, ServiceConfig,
};

const USD_QUOTE: &str = r#"{"bpi":{"USD":{"rate_float":63975.385}}}"#;

async fn lookup_usd(client: ScriptedHttpClient) -> (LookupError, usize) {
    let client = Arc::new(client);
    let lookup = PriceLookup::new(client.clone(), ServiceConfig::default());
    let error = lookup.lookup("USD").await.expect_err("lookup should fail");
    (error, client.request_count())
}

// =============================================================================
// Error Handling: service rejects the currency
// =============================================================================

#[tokio::test]
async fn when_quote_endpoint_returns_404_body_is_surfaced() {
    // Given: The service does not price the currency
    let body = r#"{"error":"Sorry, your requested currency USD is not supported"}"#;
    let client =
        ScriptedHttpClient::new().with_response("currentprice", HttpResponse::new(404, body));

    // When: The lookup runs
    let (error, requests) = lookup_usd(client).await;

    // Then: The 404 body is carried verbatim and history is never requested
    assert_eq!(
        error,
        LookupError::CurrencyNotRecognizedByService {
            endpoint: Endpoint::CurrentPrice,
            body: String::from(body),
        }
    );
    assert!(!error.retryable());
    assert_eq!(requests, 1);
}

#[tokio::test]
async fn when_history_endpoint_returns_404_body_is_surfaced() {
    let client = ScriptedHttpClient::new()
        .with_response("currentprice", HttpResponse::ok_json(USD_QUOTE))
        .with_response("historical", HttpResponse::new(404, "no history for USD"));

    let (error, requests) = lookup_usd(client).await;

    assert_eq!(
        error,
        LookupError::CurrencyNotRecognizedByService {
            endpoint: Endpoint::Historical,
            body: String::from("no history for USD"),
        }
    );
    assert_eq!(requests, 2);
}

// =============================================================================
// Error Handling: transport and protocol anomalies
// =============================================================================

#[tokio::test]
async fn when_network_fails_user_receives_service_unavailable() {
    // Given: The host cannot be reached
    let client = ScriptedHttpClient::new()
        .with_failure("currentprice", HttpError::new("connection failed: dns error"));

    // When: The lookup runs
    let (error, _) = lookup_usd(client).await;

    // Then: The error is retryable and names the transport problem
    assert_eq!(error.kind(), LookupErrorKind::ServiceUnavailable);
    assert!(error.retryable());
    assert!(error.to_string().contains("dns error"));
}

#[tokio::test]
async fn when_history_times_out_user_receives_service_unavailable() {
    let client = ScriptedHttpClient::new()
        .with_response("currentprice", HttpResponse::ok_json(USD_QUOTE))
        .with_failure("historical", HttpError::new("request timeout: operation timed out"));

    let (error, _) = lookup_usd(client).await;

    assert_eq!(
        error,
        LookupError::ServiceUnavailable {
            endpoint: Endpoint::Historical,
            message: String::from("request timeout: operation timed out"),
        }
    );
}

#[tokio::test]
async fn when_service_answers_200_without_body_user_receives_empty_body_error() {
    let client =
        ScriptedHttpClient::new().with_response("currentprice", HttpResponse::ok_json(""));

    let (error, requests) = lookup_usd(client).await;

    assert_eq!(
        error,
        LookupError::EmptyResponseBody {
            endpoint: Endpoint::CurrentPrice
        }
    );
    assert_eq!(requests, 1);
}

#[tokio::test]
async fn when_service_answers_other_status_it_is_reported() {
    for status in [201_u16, 302, 400, 429, 500, 503] {
        let client = ScriptedHttpClient::new()
            .with_response("currentprice", HttpResponse::new(status, "busy"));

        let (error, _) = lookup_usd(client).await;

        assert_eq!(
            error,
            LookupError::UnexpectedServiceResponse {
                endpoint: Endpoint::CurrentPrice,
                status,
            }
        );
        assert!(error.to_string().contains(&status.to_string()));
    }
}

// =============================================================================
// Error Handling: unusable documents
// =============================================================================

#[tokio::test]
async fn when_quote_document_is_not_json_it_is_malformed() {
    let client = ScriptedHttpClient::new()
        .with_response("currentprice", HttpResponse::ok_json("<html>maintenance</html>"));

    let (error, requests) = lookup_usd(client).await;

    assert_eq!(error.kind(), LookupErrorKind::MalformedDocument);
    assert!(!error.retryable());
    assert_eq!(requests, 1);
}

#[tokio::test]
async fn when_history_body_is_only_whitespace_it_is_malformed_not_empty() {
    let client = ScriptedHttpClient::new()
        .with_response("currentprice", HttpResponse::ok_json(USD_QUOTE))
        .with_response("historical", HttpResponse::ok_json(" \n"));

    let (error, requests) = lookup_usd(client).await;

    assert_eq!(error.kind(), LookupErrorKind::MalformedDocument);
    assert!(matches!(
        error,
        LookupError::MalformedDocument {
            endpoint: Endpoint::Historical,
            ..
        }
    ));
    assert_eq!(requests, 2);
}

#[tokio::test]
async fn when_quote_document_is_empty_object_field_is_missing() {
    let client = ScriptedHttpClient::new().with_response("currentprice", HttpResponse::ok_json("{}"));

    let (error, _) = lookup_usd(client).await;

    assert_eq!(
        error,
        LookupError::MissingField {
            endpoint: Endpoint::CurrentPrice,
            field: String::from("bpi"),
        }
    );
}

#[tokio::test]
async fn when_history_has_no_series_field_is_missing() {
    let client = ScriptedHttpClient::new()
        .with_response("currentprice", HttpResponse::ok_json(USD_QUOTE))
        .with_response("historical", HttpResponse::ok_json(r#"{"disclaimer":"x"}"#));

    let (error, _) = lookup_usd(client).await;

    assert_eq!(error.kind(), LookupErrorKind::MissingField);
}

#[tokio::test]
async fn when_history_series_is_empty_range_is_not_defaulted() {
    let client = ScriptedHttpClient::new()
        .with_response("currentprice", HttpResponse::ok_json(USD_QUOTE))
        .with_response("historical", HttpResponse::ok_json(r#"{"bpi":{}}"#));

    let (error, _) = lookup_usd(client).await;

    assert_eq!(error.kind(), LookupErrorKind::EmptySeries);
    assert_eq!(
        error.to_string(),
        "historical series for USD contains no prices"
    );
}
