//! Pipeline tests against in-memory fetchers.

mod ordering;

use crate::image::{Fetch, FetchError, FetchedResource};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// 1x1 transparent PNG.
const PNG_1X1_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub(super) fn png_1x1() -> Vec<u8> {
    STANDARD.decode(PNG_1X1_BASE64).unwrap()
}

/// A PNG header followed by a marker byte, so tests can tell images apart.
pub(super) fn marked_png(marker: u8) -> Vec<u8> {
    let mut bytes = png_1x1();
    bytes.push(marker);
    bytes
}

enum Route {
    Ok {
        content_type: String,
        bytes: Vec<u8>,
        delay: Duration,
    },
    Fail(FetchError),
}

/// Fetcher serving canned responses with optional artificial latency.
#[derive(Default)]
pub(super) struct FakeFetcher {
    routes: HashMap<String, Route>,
    calls: AtomicUsize,
}

impl FakeFetcher {
    pub(super) fn new() -> Self {
        Self::default()
    }

    pub(super) fn with_image(mut self, url: &str, bytes: Vec<u8>, delay_ms: u64) -> Self {
        self.routes.insert(
            url.to_string(),
            Route::Ok {
                content_type: "image/png".to_string(),
                bytes,
                delay: Duration::from_millis(delay_ms),
            },
        );
        self
    }

    pub(super) fn with_failure(mut self, url: &str, error: FetchError) -> Self {
        self.routes.insert(url.to_string(), Route::Fail(error));
        self
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetch for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedResource, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.routes.get(url) {
            Some(Route::Ok {
                content_type,
                bytes,
                delay,
            }) => {
                tokio::time::sleep(*delay).await;
                Ok(FetchedResource::new(content_type.clone(), bytes.clone()))
            }
            Some(Route::Fail(error)) => Err(error.clone()),
            None => Err(FetchError::Network(format!("no route to {url}"))),
        }
    }
}

/// Route pipeline logs to the test harness output.
pub(super) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Read a part of a PPTX package as text.
pub(super) fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

/// Names of every part in a PPTX package.
pub(super) fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    archive.file_names().map(str::to_string).collect()
}
