use chrono::Local;
use httpmock::Method::GET;
use serde_json::json;

use fmp_rs::timeseries::{DAY_POINTS, time_series};
use fmp_rs::{FmpError, TimeSeriesKind};

use crate::common::{self, API_KEY};

#[tokio::test]
async fn year_series_reads_daily_line_and_thins_it() {
    let server = common::setup_server();
    let today = Local::now().date_naive();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/historical-price-full/AAPL")
            .query_param("serietype", "line")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "symbol": "AAPL",
                "historical": common::daily_points(today, 400),
            }));
    });

    let client = common::client_for(&server);
    let series = time_series(&client, "AAPL", TimeSeriesKind::Year).await.unwrap();

    mock.assert();
    assert!(!series.is_empty());
    assert!(series.len() <= 53);
    assert_eq!(series[0].date().unwrap().date(), today);
    assert!((series[0].price().unwrap() - 100.0).abs() < 1e-9);
}

#[tokio::test]
async fn day_series_reads_five_minute_chart() {
    let server = common::setup_server();

    let points: Vec<_> = (0..120u32)
        .map(|i| json!({"date": "2024-06-28 15:55:00", "close": 10.0 + f64::from(i)}))
        .collect();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/historical-chart/5min/AAPL")
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!(points));
    });

    let client = common::client_for(&server);
    let series = time_series(&client, "AAPL", TimeSeriesKind::Day).await.unwrap();

    mock.assert();
    assert_eq!(series.len(), DAY_POINTS);
}

#[tokio::test]
async fn five_days_reads_thirty_minute_chart() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v3/historical-chart/30min/MSFT");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"date":"2024-06-28 15:30:00","close":420.5}]"#);
    });

    let client = common::client_for(&server);
    let series = time_series(&client, "MSFT", TimeSeriesKind::FiveDays).await.unwrap();

    mock.assert();
    assert_eq!(series.len(), 1);
}

#[tokio::test]
async fn missing_historical_is_no_data() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(GET).path("/api/v3/historical-price-full/NOPE");
        then.status(200)
            .header("content-type", "application/json")
            .body("{}");
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/v3/historical-price-full/NULL");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"historical": null}"#);
    });

    let client = common::client_for(&server);
    for symbol in ["NOPE", "NULL"] {
        let err = time_series(&client, symbol, TimeSeriesKind::Month)
            .await
            .unwrap_err();
        assert!(matches!(err, FmpError::NoData(_)), "{symbol}: {err:?}");
    }
}
