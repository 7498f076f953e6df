//! Metrics collection.
//!
//! # Metrics
//! - `gallery_router_navigations_total` (counter): by `outcome`
//!   (`resolved`, `redirected`, `not_found`)
//! - `gallery_router_titles_total` (counter): by `action`
//!   (`set`, `fallback`, `skipped`)

pub const NAVIGATIONS_TOTAL: &str = "gallery_router_navigations_total";
pub const TITLES_TOTAL: &str = "gallery_router_titles_total";

/// Count a navigation attempt.
pub fn record_navigation(outcome: &'static str) {
    ::metrics::counter!(NAVIGATIONS_TOTAL, "outcome" => outcome).increment(1);
}

/// Count a title guard decision.
pub fn record_title(action: &'static str) {
    ::metrics::counter!(TITLES_TOTAL, "action" => action).increment(1);
}
