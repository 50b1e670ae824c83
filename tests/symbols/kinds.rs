use fmp_rs::symbols::exchange_name;
use fmp_rs::{FmpError, TickerKind};

#[test]
fn kind_names_are_case_insensitive() {
    assert_eq!("ETF".parse::<TickerKind>().unwrap(), TickerKind::Etf);
    assert_eq!("Stock".parse::<TickerKind>().unwrap(), TickerKind::Stock);
    assert_eq!("trust".parse::<TickerKind>().unwrap(), TickerKind::Stock);
    assert_eq!("crypto".parse::<TickerKind>().unwrap(), TickerKind::Crypto);
    assert_eq!(TickerKind::Commodity.to_string(), "commodity");
}

#[test]
fn unknown_kind_is_a_data_error() {
    let err = "warrant".parse::<TickerKind>().unwrap_err();
    assert!(matches!(err, FmpError::Data(_)), "unexpected error: {err:?}");
}

#[test]
fn exchange_names_resolve() {
    assert!(exchange_name("nasdaq").is_some());
    assert_eq!(exchange_name("GER"), exchange_name("XETRA"));
    assert!(exchange_name("NOT-AN-EXCHANGE").is_none());
}
