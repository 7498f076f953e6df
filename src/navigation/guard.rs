//! Navigation hooks and the title guard.
//!
//! # States (per transition)
//! ```text
//! Idle → Firing: engine resolved the final target
//! Firing → Idle: title written (or skipped)
//! ```
//!
//! # Design Decisions
//! - Hooks return nothing: they cannot block, cancel or redirect
//! - Hooks see only the final resolved route, never a redirect container
//! - A missing title is not an error

use crate::navigation::title::{TitleFormat, TitleOutcome, TitleSink};
use crate::observability::metrics;
use crate::routing::{ResolvedRoute, RouteMatch};

/// Pre-transition hook, invoked once per transition.
pub trait NavigationHook: Send + Sync {
    /// Called with the resolved target and the route being left, if any.
    fn before_each(&self, to: &RouteMatch<'_>, from: Option<&ResolvedRoute>);
}

/// Hook backed by a closure. Built with [`hook_fn`].
#[derive(Clone)]
pub struct FnHook<F> {
    f: F,
}

/// Wrap a closure as a [`NavigationHook`].
pub fn hook_fn<F>(f: F) -> FnHook<F>
where
    F: Fn(&RouteMatch<'_>, Option<&ResolvedRoute>) + Send + Sync,
{
    FnHook { f }
}

impl<F> NavigationHook for FnHook<F>
where
    F: Fn(&RouteMatch<'_>, Option<&ResolvedRoute>) + Send + Sync,
{
    fn before_each(&self, to: &RouteMatch<'_>, from: Option<&ResolvedRoute>) {
        (self.f)(to, from)
    }
}

/// Writes the target route's title to a [`TitleSink`].
#[derive(Debug, Clone)]
pub struct TitleGuard<S> {
    sink: S,
    format: TitleFormat,
}

impl<S: TitleSink> TitleGuard<S> {
    pub fn new(sink: S) -> Self {
        Self::with_format(sink, TitleFormat::default())
    }

    pub fn with_format(sink: S, format: TitleFormat) -> Self {
        Self { sink, format }
    }

    pub fn format(&self) -> &TitleFormat {
        &self.format
    }

    /// Apply the title effect for `route`.
    pub fn apply(&self, route: &ResolvedRoute) -> TitleOutcome {
        let outcome = self.format.outcome(route.title());
        match outcome.title() {
            Some(title) => self.sink.set_title(title),
            None => tracing::debug!(path = %route.path(), "Route has no title, keeping current"),
        }
        metrics::record_title(outcome.label());
        outcome
    }
}

impl<S: TitleSink> NavigationHook for TitleGuard<S> {
    fn before_each(&self, to: &RouteMatch<'_>, _from: Option<&ResolvedRoute>) {
        self.apply(to.route());
    }
}
