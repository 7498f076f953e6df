//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! navigate(target)
//!     → location.rs (parse path, query, fragment)
//!     → RouteRegistry::resolve (one lookup, redirect already bound)
//!     → guard.rs (every hook once, final target only)
//!         → TitleGuard → title.rs (format) → TitleSink
//!     → navigator.rs (commit current route)
//! ```
//!
//! # Design Decisions
//! - The title sink is injected into the guard
//! - Hooks are side-effect only and cannot veto a transition
//! - Engine-level "not found" is an error to the caller, not a hook concern

pub mod guard;
pub mod location;
pub mod navigator;
pub mod title;

use thiserror::Error;

pub use guard::{hook_fn, FnHook, NavigationHook, TitleGuard};
pub use location::Location;
pub use navigator::{Navigator, Transition};
pub use title::{DocumentTitle, TitleFormat, TitleOutcome, TitleSink};

/// Errors returned by [`Navigator::navigate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("invalid navigation target `{target}`: {source}")]
    InvalidLocation {
        target: String,
        #[source]
        source: url::ParseError,
    },

    #[error("navigation target `{target}` is outside the application")]
    ForeignOrigin { target: String },

    #[error("no route matches `{path}`")]
    NotFound { path: String },
}
