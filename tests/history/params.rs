use chrono::NaiveDate;

use fmp_rs::history::historical_price;
use fmp_rs::{DateWindow, FmpClient, Period};

fn client() -> FmpClient {
    FmpClient::new("test-key").unwrap()
}

fn january() -> DateWindow {
    DateWindow::new(
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    )
}

#[test]
fn stock_path_puts_earlier_date_first() {
    let client = client();
    let path = historical_price(&client, "AAPL", Period::parse("1 day").unwrap())
        .window(january())
        .path();
    assert_eq!(path, "historical-price/AAPL/1/day/2024-01-01/2024-02-01");
}

#[test]
fn index_symbols_drop_the_caret() {
    let client = client();
    let path = historical_price(&client, "^GSPC", Period::parse("1hour").unwrap())
        .window(january())
        .path();
    assert_eq!(path, "historical-price-index/GSPC/1/hour/2024-01-01/2024-02-01");
}

#[test]
fn crypto_uses_interval_endpoint_and_singular_unit() {
    let client = client();
    let path = historical_price(&client, "BTCUSD", Period::parse("5 minutes").unwrap())
        .window(january())
        .crypto(true)
        .path();
    assert_eq!(
        path,
        "historical-price-crypto-interval/BTCUSD/5/minute/2024-01-01/2024-02-01"
    );
}

#[test]
fn default_window_covers_ten_periods() {
    let client = client();
    let period = Period::parse("1day").unwrap();
    let expected = DateWindow::from_period(&period, 10);
    let path = historical_price(&client, "AAPL", period).path();
    assert_eq!(
        path,
        format!(
            "historical-price/AAPL/1/day/{}/{}",
            expected.end().format("%Y-%m-%d"),
            expected.start().format("%Y-%m-%d")
        )
    );
}
