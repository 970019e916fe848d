mod support;

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use support::MemoryProvider;
use tempfile::TempDir;
use trireme_engine::{ContentImporter, ImportSettings, ImportWorker, SchemeRouter, CONTENT_SCHEME};
use url::Url;

#[test]
fn worker_reports_results_in_submission_order() {
    bridge_logging::initialize_for_tests();
    let cache = TempDir::new().unwrap();
    let provider = MemoryProvider::default().with(
        "content://provider/torrents/1",
        Some("one.torrent"),
        b"first",
    );
    let router = SchemeRouter::new().with_route(CONTENT_SCHEME, Arc::new(provider));
    let worker = ImportWorker::new(ContentImporter::new(
        Arc::new(router),
        ImportSettings::with_cache_dir(cache.path()),
    ));

    worker.submit(10, Url::parse("content://provider/torrents/1").unwrap());
    worker.submit(11, Url::parse("content://provider/torrents/2").unwrap());

    let first = worker.recv_timeout(Duration::from_secs(5)).expect("first event");
    assert_eq!(first.request, 10);
    let imported = first.result.expect("import ok");
    assert_eq!(fs::read(imported.path).unwrap(), b"first");

    let second = worker.recv_timeout(Duration::from_secs(5)).expect("second event");
    assert_eq!(second.request, 11);
    assert!(second.result.is_err());

    assert!(worker.try_recv().is_none());
}
