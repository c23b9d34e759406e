//! Verifies that contract operations open the expected tracing spans.

#![allow(clippy::expect_used)]

use std::sync::{Arc, Mutex};

use hashfile_contract::HashFileContract;
use hashfile_storage::MemoryBackend;
use tracing::Subscriber;
use tracing_subscriber::{layer::SubscriberExt, registry::LookupSpan};

// ---------------------------------------------------------------------------
// Collecting layer: records span names as they are created
// ---------------------------------------------------------------------------

#[derive(Clone, Default)]
struct SpanCollector {
    spans: Arc<Mutex<Vec<String>>>,
}

impl<S> tracing_subscriber::Layer<S> for SpanCollector
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        _attrs: &tracing::span::Attributes<'_>,
        id: &tracing::span::Id,
        ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if let Some(span) = ctx.span(id) {
            self.spans.lock().expect("lock poisoned").push(span.name().to_owned());
        }
    }
}

fn collect() -> (SpanCollector, Arc<Mutex<Vec<String>>>) {
    let collector = SpanCollector::default();
    let spans = Arc::clone(&collector.spans);
    (collector, spans)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_and_update_create_spans() {
    let (collector, spans) = collect();
    let subscriber = tracing_subscriber::registry().with(collector);
    let _guard = tracing::subscriber::set_default(subscriber);

    let contract = HashFileContract::new(MemoryBackend::new());
    contract
        .create_hash_file("k1", "a.txt", "alice", "deadbeef", "2024-01-01")
        .await
        .expect("create should succeed");
    contract.change_file_hash("k1", "cafebabe").await.expect("update should succeed");

    let recorded = spans.lock().expect("lock poisoned");
    for name in ["create_hash_file", "change_file_hash", "get_file", "set"] {
        assert!(recorded.iter().any(|s| s == name), "expected a '{name}' span, got: {recorded:?}");
    }
}

#[tokio::test]
async fn user_query_nests_scan_span() {
    let (collector, spans) = collect();
    let subscriber = tracing_subscriber::registry().with(collector);
    let _guard = tracing::subscriber::set_default(subscriber);

    let contract = HashFileContract::new(MemoryBackend::new());
    let _ = contract.query_user("nobody").await;

    let recorded = spans.lock().expect("lock poisoned");
    for name in ["query_user", "list_files_by_user", "get_range"] {
        assert!(recorded.iter().any(|s| s == name), "expected a '{name}' span, got: {recorded:?}");
    }
}
