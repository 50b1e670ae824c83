use std::sync::Arc;

use fmp_rs::{HandleState, RequestBatch, Transport};

use crate::common::{self, ScriptedTransport};

#[tokio::test]
async fn same_key_replaces_handle_in_place() {
    let transport = ScriptedTransport::new();
    transport.respond("/first", &[(200, "[1]")]);
    transport.respond("/second", &[(200, "[2]")]);
    transport.respond("/other", &[(200, "[3]")]);

    let shared: Arc<dyn Transport> = transport.clone();
    let mut batch = RequestBatch::new(shared, common::fast_retry(2));
    let first = batch.get(common::url("/first"), Some("AAPL".into()));
    let other = batch.get(common::url("/other"), Some("MSFT".into()));
    let again = batch.get(common::url("/second"), Some("AAPL".into()));

    assert_eq!(first, again);
    assert_ne!(first, other);
    assert_eq!(batch.len(), 2);

    batch.commit().await;

    let aapl = batch.keyed("AAPL").unwrap();
    assert_eq!(aapl.url().path(), "/second");
    assert_eq!(aapl.response().unwrap().content(), "[2]");
    assert!(batch.keyed("GOOG").is_none());

    let keys: Vec<_> = batch.iter().map(|(k, _)| k.map(str::to_string)).collect();
    assert_eq!(keys, vec![Some("AAPL".to_string()), Some("MSFT".to_string())]);
}

#[tokio::test]
async fn into_keyed_skips_unkeyed_and_keeps_order() {
    let transport = ScriptedTransport::new();
    transport.respond("/x", &[(200, "[]")]);
    transport.respond("/y", &[(429, ""), (200, "[]")]);
    transport.respond("/z", &[(200, "[]")]);

    let shared: Arc<dyn Transport> = transport.clone();
    let mut batch = RequestBatch::new(shared, common::fast_retry(1));
    batch.get(common::url("/x"), Some("X".into()));
    batch.get(common::url("/z"), None);
    batch.get(common::url("/y"), Some("Y".into()));

    batch.commit().await;

    let keyed = batch.into_keyed();
    let keys: Vec<&str> = keyed.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, ["X", "Y"]);
    assert!(keyed.iter().all(|(_, h)| h.state() == HandleState::Succeeded));
    assert_eq!(keyed[1].1.attempts(), 2);
}
