//! Reference navigation engine.
//!
//! # Responsibilities
//! - Own the current route
//! - Resolve each navigation target against the registry
//! - Run every registered hook once, with the final target, before
//!   committing the transition
//!
//! # Design Decisions
//! - Transitions are processed serially; `navigate` takes `&mut self`
//! - Unknown paths fail the navigation and leave all state untouched
//! - The registry is shared, the current route is not

use std::fmt;
use std::sync::Arc;

use crate::navigation::guard::NavigationHook;
use crate::navigation::location::Location;
use crate::navigation::NavigationError;
use crate::observability::metrics;
use crate::routing::{ResolvedRoute, RouteRegistry};

/// A committed transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Target as requested, parsed.
    pub location: Location,

    /// Full path of the resolved route.
    pub path: String,

    /// Container path, when the target was a redirect.
    pub redirected_from: Option<String>,
}

/// Minimal navigation engine driving hooks over a [`RouteRegistry`].
pub struct Navigator {
    registry: Arc<RouteRegistry>,
    hooks: Vec<Box<dyn NavigationHook>>,
    current: Option<Transition>,
}

impl fmt::Debug for Navigator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("routes", &self.registry.len())
            .field("hooks", &self.hooks.len())
            .field("current", &self.current)
            .finish()
    }
}

impl Navigator {
    pub fn new(registry: Arc<RouteRegistry>) -> Self {
        Self {
            registry,
            hooks: Vec::new(),
            current: None,
        }
    }

    /// Register a hook to run before every transition, in registration order.
    pub fn before_each<H: NavigationHook + 'static>(&mut self, hook: H) -> &mut Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The last committed transition.
    pub fn current(&self) -> Option<&Transition> {
        self.current.as_ref()
    }

    /// The route the navigator currently shows.
    pub fn current_route(&self) -> Option<&ResolvedRoute> {
        let path = &self.current.as_ref()?.path;
        self.registry.resolve(path).map(|m| m.route())
    }

    /// Navigate to `target`.
    pub fn navigate(&mut self, target: &str) -> Result<&Transition, NavigationError> {
        let location = Location::parse(target)?;

        let Some(to) = self.registry.resolve(location.path()) else {
            tracing::warn!(location = %target, "No route matches navigation target");
            metrics::record_navigation("not_found");
            return Err(NavigationError::NotFound {
                path: location.path().to_string(),
            });
        };

        let from = self
            .current
            .as_ref()
            .and_then(|c| self.registry.resolve(&c.path))
            .map(|m| m.route());
        for hook in &self.hooks {
            hook.before_each(&to, from);
        }

        let transition = Transition {
            path: to.route().path().to_string(),
            redirected_from: to.redirected_from().map(str::to_string),
            location,
        };
        tracing::debug!(
            from = from.map(ResolvedRoute::path),
            to = %transition.path,
            redirected_from = transition.redirected_from.as_deref(),
            "Navigation committed"
        );
        metrics::record_navigation(if to.is_redirect() { "redirected" } else { "resolved" });

        Ok(self.current.insert(transition))
    }
}
