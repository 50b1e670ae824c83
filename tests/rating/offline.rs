use std::sync::Arc;

use httpmock::Method::GET;

use fmp_rs::rating::rating;
use fmp_rs::{FmpClient, FmpError, Transport};

use crate::common::{self, API_KEY, ScriptedTransport};

const AAPL: &str = r#"[{"symbol":"AAPL","date":"2024-06-28","rating":"S","ratingScore":5,"ratingRecommendation":"Strong Buy"}]"#;
const MSFT: &str = r#"[{"symbol":"MSFT","date":"2024-06-28","rating":"A-","ratingScore":4,"ratingRecommendation":"Buy"}]"#;

#[tokio::test]
async fn ratings_are_keyed_by_requested_symbol() {
    let server = common::setup_server();

    let aapl = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/rating/AAPL")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(AAPL);
    });
    let msft = server.mock(|when, then| {
        when.method(GET).path("/api/v3/rating/MSFT");
        then.status(200)
            .header("content-type", "application/json")
            .body(MSFT);
    });

    let client = common::client_for(&server);
    let ratings = rating(&client, &["MSFT", "AAPL", "MSFT"]).await.unwrap();

    aapl.assert_hits(1);
    // Requested twice; the second dispatch replaces the first.
    assert!(msft.hits() >= 1);
    assert_eq!(ratings.symbols().collect::<Vec<_>>(), ["MSFT", "AAPL"]);

    let a = ratings.get("AAPL").unwrap();
    assert_eq!(a.symbol().unwrap(), "AAPL");
    assert_eq!(a.rating().unwrap(), Some("S"));
    assert_eq!(a.rating_score().unwrap(), 5);
    assert_eq!(a.recommendation().unwrap(), Some("Strong Buy"));
}

#[tokio::test]
async fn symbol_without_rating_is_no_data() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/api/v3/rating/NEWCO");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = common::client_for(&server);
    let err = rating(&client, &["NEWCO"]).await.unwrap_err();
    assert!(matches!(err, FmpError::NoData(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn throttled_rating_is_replayed() {
    let transport = ScriptedTransport::new();
    transport.respond("/api/v3/rating/AAPL", &[(429, ""), (200, AAPL)]);
    transport.respond("/api/v3/rating/MSFT", &[(200, MSFT)]);

    let shared: Arc<dyn Transport> = transport.clone();
    let client = FmpClient::builder()
        .api_key(API_KEY)
        .transport(shared)
        .retry_config(common::fast_retry(2))
        .build()
        .unwrap();

    let ratings = rating(&client, &["AAPL", "MSFT"]).await.unwrap();

    assert_eq!(ratings.len(), 2);
    assert_eq!(ratings.get("MSFT").unwrap().rating().unwrap(), Some("A-"));
    assert_eq!(transport.calls("/api/v3/rating/AAPL"), 2);
    assert_eq!(transport.calls("/api/v3/rating/MSFT"), 1);
}

#[tokio::test]
async fn no_symbols_no_requests() {
    let transport = ScriptedTransport::new();
    let shared: Arc<dyn Transport> = transport.clone();
    let client = FmpClient::builder()
        .api_key(API_KEY)
        .transport(shared)
        .build()
        .unwrap();

    assert!(rating(&client, &[]).await.unwrap().is_empty());
}
