//! Document title state.
//!
//! # Responsibilities
//! - Define the single-method sink the title guard writes to
//! - Provide a process-wide title holder for hosts without their own
//! - Derive the displayed title from route metadata
//!
//! # Design Decisions
//! - The sink is injected, never a free global, so tests can swap it
//! - `DocumentTitle` clones share one slot; reads are lock-free

use std::sync::Arc;

use arc_swap::ArcSwapOption;

/// Receiver of the current document title.
pub trait TitleSink: Send + Sync {
    fn set_title(&self, title: &str);
}

impl<T: TitleSink + ?Sized> TitleSink for Arc<T> {
    fn set_title(&self, title: &str) {
        (**self).set_title(title)
    }
}

/// Shared document title slot.
#[derive(Debug, Clone)]
pub struct DocumentTitle {
    inner: Arc<ArcSwapOption<String>>,
}

impl DocumentTitle {
    /// Create an empty title slot.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ArcSwapOption::empty()),
        }
    }

    /// Current title, if any has been set.
    pub fn current(&self) -> Option<Arc<String>> {
        self.inner.load_full()
    }

    /// Current title as an owned string.
    pub fn get(&self) -> Option<String> {
        self.current().map(|t| t.as_str().to_owned())
    }
}

impl Default for DocumentTitle {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleSink for DocumentTitle {
    fn set_title(&self, title: &str) {
        self.inner.store(Some(Arc::new(title.to_owned())));
    }
}

/// What the guard decided to do with a route's title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleOutcome {
    /// The route's own title, formatted.
    Set(String),
    /// The route had no title; the configured fallback applies.
    Fallback(String),
    /// The route had no title and there is no fallback.
    Skipped,
}

impl TitleOutcome {
    pub fn title(&self) -> Option<&str> {
        match self {
            TitleOutcome::Set(t) | TitleOutcome::Fallback(t) => Some(t),
            TitleOutcome::Skipped => None,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            TitleOutcome::Set(_) => "set",
            TitleOutcome::Fallback(_) => "fallback",
            TitleOutcome::Skipped => "skipped",
        }
    }
}

/// How a route title becomes the document title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFormat {
    /// Application name placed before the route title.
    pub prefix: Option<String>,

    /// Text between prefix and route title.
    pub separator: String,

    /// Title used when a route declares none. `None` leaves the title as is.
    pub fallback: Option<String>,
}

impl TitleFormat {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::default()
        }
    }

    pub fn outcome(&self, title: Option<&str>) -> TitleOutcome {
        match (title, &self.fallback) {
            (Some(title), _) => TitleOutcome::Set(match &self.prefix {
                Some(prefix) => format!("{}{}{}", prefix, self.separator, title),
                None => title.to_owned(),
            }),
            (None, Some(fallback)) => TitleOutcome::Fallback(fallback.clone()),
            (None, None) => TitleOutcome::Skipped,
        }
    }
}

impl Default for TitleFormat {
    fn default() -> Self {
        Self {
            prefix: None,
            separator: " - ".to_string(),
            fallback: None,
        }
    }
}
