//! Client-side navigation layer for the lesson gallery.
//!
//! Route groups are composed once into an immutable [`RouteRegistry`];
//! a [`Navigator`] resolves targets against it and runs the
//! [`TitleGuard`] before every transition.

pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use navigation::{DocumentTitle, NavigationHook, Navigator, TitleGuard, TitleSink};
pub use routing::{RouteEntry, RouteGroup, RouteRegistry, ViewKey};
