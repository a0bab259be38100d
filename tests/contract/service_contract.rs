//! Contract tests against documents shaped like real BPI responses.

use std::sync::Arc;

use bitstatus_core::{
    aggregate_history, current_price_url, historical_url, parse_quote, CurrencyCode,
    HistoryWindow, HttpResponse, PriceLookup, ScriptedHttpClient, ServiceConfig, ISO_4217_CODES,
};
use rust_decimal_macros::dec;
use time::macros::date;

const CURRENT_PRICE_GBP: &str = r#"{
  "time": {
    "updated": "Sep 18, 2013 17:27:00 UTC",
    "updatedISO": "2013-09-18T17:27:00+00:00"
  },
  "disclaimer": "This data was produced from the CoinDesk Bitcoin Price Index.",
  "bpi": {
    "USD": {
      "code": "USD",
      "rate": "126.5235",
      "description": "United States Dollar",
      "rate_float": 126.5235
    },
    "GBP": {
      "code": "GBP",
      "rate": "79.2495",
      "description": "British Pound Sterling",
      "rate_float": 79.2495
    }
  }
}"#;

const HISTORICAL_GBP: &str = r#"{
  "bpi": {
    "2013-09-01": 82.8218,
    "2013-09-02": 82.2528,
    "2013-09-03": 81.7411,
    "2013-09-04": 77.9394,
    "2013-09-05": 77.1071
  },
  "disclaimer": "This data was produced from the CoinDesk Bitcoin Price Index. BPI value data returned as GBP.",
  "time": {
    "updated": "Sep 6, 2013 00:03:00 UTC",
    "updatedISO": "2013-09-06T00:03:00+00:00"
  }
}"#;

fn gbp() -> CurrencyCode {
    CurrencyCode::parse("GBP").expect("valid currency")
}

#[test]
fn current_price_document_yields_requested_rate() {
    let quote = parse_quote(CURRENT_PRICE_GBP, &gbp()).expect("quote should parse");
    assert_eq!(quote.amount, dec!(79.2495));
    assert_eq!(quote.currency, gbp());
}

#[test]
fn historical_document_yields_bounds() {
    let range = aggregate_history(HISTORICAL_GBP, &gbp()).expect("range should aggregate");
    assert_eq!(range.min, dec!(77.1071));
    assert_eq!(range.max, dec!(82.8218));
}

#[test]
fn parsing_is_idempotent() {
    let first = aggregate_history(HISTORICAL_GBP, &gbp()).expect("first");
    let second = aggregate_history(HISTORICAL_GBP, &gbp()).expect("second");
    assert_eq!(first, second);
}

#[test]
fn urls_follow_service_templates() {
    let base = "https://api.coindesk.com";
    assert_eq!(
        current_price_url(base, &gbp()),
        "https://api.coindesk.com/v1/bpi/currentprice/GBP.json"
    );

    let window = HistoryWindow::trailing(date!(2013 - 10 - 01), 30);
    assert_eq!(
        historical_url(base, &gbp(), window),
        "https://api.coindesk.com/v1/bpi/historical/close.json?start=2013-09-01&end=2013-10-01&currency=GBP"
    );
}

#[test]
fn every_registry_code_builds_an_upper_case_url() {
    for code in ISO_4217_CODES {
        let currency = CurrencyCode::parse(&code.to_ascii_lowercase()).expect("registry code");
        let url = current_price_url("https://api.coindesk.com", &currency);
        assert!(url.ends_with(&format!("/{code}.json")), "url: {url}");
    }
}

#[tokio::test]
async fn custom_base_url_is_honored() {
    let client = Arc::new(
        ScriptedHttpClient::new()
            .with_response("currentprice/GBP.json", HttpResponse::ok_json(CURRENT_PRICE_GBP))
            .with_response("historical/close.json", HttpResponse::ok_json(HISTORICAL_GBP)),
    );
    let config = ServiceConfig::default()
        .with_base_url("http://127.0.0.1:9090/")
        .expect("valid base url");

    let report = PriceLookup::new(client.clone(), config)
        .lookup("gbp")
        .await
        .expect("lookup should succeed");

    assert_eq!(report.quote.amount, dec!(79.2495));
    assert_eq!(report.range.min, dec!(77.1071));
    assert!(client
        .recorded_requests()
        .iter()
        .all(|request| request.url.starts_with("http://127.0.0.1:9090/v1/bpi/")));
}
