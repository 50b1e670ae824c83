use chrono::NaiveDate;
use httpmock::Method::GET;

use fmp_rs::StatementPeriod;
use fmp_rs::fundamentals::{financial, financials};

use crate::common::{self, API_KEY};

const STATEMENTS: &str = r#"[
  {"date":"2024-03-30","symbol":"AAPL","period":"Q2","revenue":90753000000,"ebitda":30736000000,"netIncome":23636000000,"eps":1.53},
  {"date":"2023-12-30","symbol":"AAPL","period":"Q1","revenue":119575000000,"ebitda":null,"netIncome":33916000000,"eps":2.19}
]"#;

#[tokio::test]
async fn quarterly_statements_with_limit() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/income-statement/AAPL")
            .query_param("apikey", API_KEY)
            .query_param("limit", "2")
            .query_param("period", "quarter");
        then.status(200)
            .header("content-type", "application/json")
            .body(STATEMENTS);
    });

    let client = common::client_for(&server);
    let rows = financials(&client, "AAPL", Some(2), Some(StatementPeriod::Quarter))
        .await
        .unwrap();

    mock.assert();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date().unwrap(), NaiveDate::from_ymd_opt(2024, 3, 30).unwrap());
    assert_eq!(rows[0].revenue().unwrap(), Some(90_753_000_000));
    assert_eq!(rows[0].net_income().unwrap(), Some(23_636_000_000));
    assert_eq!(rows[1].ebitda().unwrap(), None);
    assert_eq!(rows[1].eps().unwrap(), Some(2.19));
}

#[tokio::test]
async fn latest_statement_requests_a_single_row() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/income-statement/AAPL")
            .query_param("limit", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(STATEMENTS);
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/api/v3/income-statement/NEWCO")
            .query_param("limit", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = common::client_for(&server);
    let latest = financial(&client, "AAPL", None).await.unwrap().unwrap();
    mock.assert();
    assert_eq!(latest.symbol().unwrap(), "AAPL");

    assert!(financial(&client, "NEWCO", None).await.unwrap().is_none());
}

#[test]
fn statement_period_names() {
    assert_eq!(StatementPeriod::default(), StatementPeriod::Annual);
    assert_eq!("quarter".parse::<StatementPeriod>().unwrap(), StatementPeriod::Quarter);
    assert!("monthly".parse::<StatementPeriod>().is_err());
}
