//! Shared helpers for integration tests.

use std::sync::{Arc, Mutex};

use gallery_router::navigation::{Navigator, TitleGuard, TitleSink};
use gallery_router::routing::{RouteEntry, RouteGroup, RouteRegistry};

/// Title sink that records every write.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    titles: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.titles.lock().unwrap().last().cloned()
    }
}

impl TitleSink for RecordingSink {
    fn set_title(&self, title: &str) {
        self.titles.lock().unwrap().push(title.to_string());
    }
}

/// Leaf route whose view key and title are both `title`.
#[allow(dead_code)]
pub fn leaf(path: &str, title: &str) -> RouteEntry {
    RouteEntry::new(path, title).with_title(title)
}

/// Leaf route with a distinct view key.
#[allow(dead_code)]
pub fn route(path: &str, view: &str, title: &str) -> RouteEntry {
    RouteEntry::new(path, view).with_title(title)
}

#[allow(dead_code)]
pub fn group(name: &str, routes: Vec<RouteEntry>) -> RouteGroup {
    RouteGroup::from_routes(name, routes)
}

/// Navigator over `registry` with a title guard writing to a fresh sink.
#[allow(dead_code)]
pub fn navigator(registry: RouteRegistry) -> (Navigator, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let mut navigator = Navigator::new(Arc::new(registry));
    navigator.before_each(TitleGuard::new(sink.clone()));
    (navigator, sink)
}
