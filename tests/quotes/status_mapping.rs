use httpmock::Method::GET;

use fmp_rs::FmpError;
use fmp_rs::quote::{quote, quotes};

use crate::common;

#[tokio::test]
async fn server_error_maps_to_status() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/api/v3/quote/AAPL");
        then.status(500).body("Internal Server Error");
    });

    let client = common::client_for(&server);
    match quote(&client, "AAPL").await.unwrap_err() {
        FmpError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.contains("/api/v3/quote/AAPL"));
        }
        other => panic!("expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn single_request_429_is_rate_limited_without_replay() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/quote/AAPL,MSFT");
        then.status(429);
    });

    let client = common::client_for(&server);
    let err = quotes(&client, &["AAPL", "MSFT"]).await.unwrap_err();

    mock.assert_hits(1);
    assert!(matches!(err, FmpError::RateLimited { .. }), "unexpected error: {err:?}");
}

#[tokio::test]
async fn invalid_json_maps_to_json_error() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/api/v3/quote/BAD");
        then.status(200).body("<html>maintenance</html>");
    });

    let client = common::client_for(&server);
    let err = quote(&client, "BAD").await.unwrap_err();
    assert!(matches!(err, FmpError::Json(_)), "unexpected error: {err:?}");
}
