#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;
use trireme_bridge::{
    Bridge, BridgeConfig, ContentResolver, Host, ImportSettings, PickerRequest, Reply,
};
use url::Url;

/// Records what the bridge asked the activity to do.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub permission_granted: bool,
    pub pickers: Vec<(PickerRequest, i32)>,
    pub permission_requests: Vec<i32>,
}

impl Host for FakeHost {
    fn launch_picker(&mut self, request: &PickerRequest, request_code: i32) {
        self.pickers.push((request.clone(), request_code));
    }

    fn read_permission_granted(&self) -> bool {
        self.permission_granted
    }

    fn request_read_permission(&mut self, request_code: i32) {
        self.permission_requests.push(request_code);
    }
}

/// Content provider serving `(display name, bytes)` per locator.
#[derive(Default)]
pub struct FakeProvider {
    entries: HashMap<String, (Option<String>, Vec<u8>)>,
}

impl FakeProvider {
    pub fn with(mut self, locator: &str, name: Option<&str>, bytes: &[u8]) -> Self {
        self.entries.insert(
            locator.to_string(),
            (name.map(str::to_string), bytes.to_vec()),
        );
        self
    }

    fn entry(&self, locator: &Url) -> io::Result<&(Option<String>, Vec<u8>)> {
        self.entries
            .get(locator.as_str())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, locator.to_string()))
    }
}

impl ContentResolver for FakeProvider {
    fn display_name(&self, locator: &Url) -> io::Result<Option<String>> {
        Ok(self.entry(locator)?.0.clone())
    }

    fn open(&self, locator: &Url) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.entry(locator)?.1.clone())))
    }
}

pub struct Harness {
    pub bridge: Bridge<FakeHost>,
    pub cache: TempDir,
}

impl Harness {
    pub fn new(host: FakeHost, provider: FakeProvider) -> Self {
        bridge_logging::initialize_for_tests();
        let cache = TempDir::new().unwrap();
        let config = BridgeConfig {
            import: ImportSettings::with_cache_dir(cache.path()),
            ..BridgeConfig::default()
        };
        let bridge = Bridge::new(host, Arc::new(provider), &config);
        Self { bridge, cache }
    }
}

/// Wait until the import worker has delivered something.
pub fn pump_until_done(bridge: &mut Bridge<FakeHost>) {
    let handled = bridge.pump_blocking(Duration::from_secs(5));
    assert!(handled > 0, "no import finished in time");
}

pub fn reply(rx: &Receiver<Reply>) -> Reply {
    rx.try_recv().expect("call was answered")
}

pub fn no_reply(rx: &Receiver<Reply>) {
    assert!(rx.try_recv().is_err(), "call answered too early");
}
