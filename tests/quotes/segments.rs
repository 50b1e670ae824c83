use std::sync::Arc;

use httpmock::Method::GET;
use serde_json::json;

use fmp_rs::quote::{SEGMENTS, quotes_by_segments};
use fmp_rs::{FmpClient, Transport};

use crate::common::{self, API_KEY, ScriptedTransport};

#[tokio::test]
async fn incomplete_rows_are_skipped() {
    let server = common::setup_server();

    let mut missing_open = common::quote_record("NOOPEN", 5.0);
    missing_open.as_object_mut().unwrap().remove("open");
    let mut null_price = common::quote_record("NOPRICE", 5.0);
    null_price["price"] = json!(null);
    let mut null_name = common::quote_record("NONAME", 5.0);
    null_name["name"] = json!(null);

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/quotes/euronext");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                common::quote_record("ASML", 900.0),
                missing_open,
                null_price,
                null_name,
            ]));
    });

    let client = common::client_for(&server);
    let got = quotes_by_segments(&client, &["euronext"]).await.unwrap();

    mock.assert();
    assert_eq!(got.symbols().collect::<Vec<_>>(), ["ASML"]);
}

#[tokio::test]
async fn later_segment_wins_on_duplicate_symbols() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/api/v3/quotes/nyse");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([common::quote_record("DUAL", 1.0), common::quote_record("KO", 60.0)]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v3/quotes/amex");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([common::quote_record("DUAL", 2.0)]));
    });

    let client = common::client_for(&server);
    let got = quotes_by_segments(&client, &["nyse", "amex"]).await.unwrap();

    assert_eq!(got.symbols().collect::<Vec<_>>(), ["DUAL", "KO"]);
    assert!((got.get("DUAL").unwrap().price().unwrap() - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn throttled_segment_recovers_within_budget() {
    let transport = ScriptedTransport::new();
    let body = json!([common::quote_record("AAPL", 190.0)]).to_string();
    transport.respond("/api/v3/quotes/nasdaq", &[(429, ""), (429, ""), (200, &body)]);
    transport.respond("/api/v3/quotes/nyse", &[(200, "[]")]);

    let shared: Arc<dyn Transport> = transport.clone();
    let client = FmpClient::builder()
        .api_key(API_KEY)
        .transport(shared)
        .retry_config(common::fast_retry(2))
        .build()
        .unwrap();

    let got = quotes_by_segments(&client, &["nasdaq", "nyse"]).await.unwrap();

    assert!(got.has("AAPL"));
    assert_eq!(transport.calls("/api/v3/quotes/nasdaq"), 3);
    assert_eq!(transport.calls("/api/v3/quotes/nyse"), 1);
}

#[test]
fn segment_table_is_unique_and_lowercase() {
    let mut seen = std::collections::HashSet::new();
    for segment in SEGMENTS {
        assert!(seen.insert(*segment), "duplicate segment {segment}");
        assert_eq!(segment.to_ascii_lowercase(), *segment);
    }
    assert!(SEGMENTS.contains(&"nasdaq"));
}
