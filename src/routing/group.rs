//! Route groups.
//!
//! A group is the ordered route list of one chapter. It has no behavior
//! beyond construction and knows nothing about other groups.

use serde::{Deserialize, Serialize};

use crate::routing::entry::RouteEntry;

/// Ordered, named collection of routes for one topical section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteGroup {
    /// Group name, used in diagnostics and listings.
    name: String,

    #[serde(default)]
    routes: Vec<RouteEntry>,
}

impl RouteGroup {
    /// Create an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            routes: Vec::new(),
        }
    }

    /// Create a group from an ordered list of entries.
    pub fn from_routes(name: impl Into<String>, routes: impl IntoIterator<Item = RouteEntry>) -> Self {
        Self {
            name: name.into(),
            routes: routes.into_iter().collect(),
        }
    }

    /// Append a route, keeping declaration order.
    pub fn route(mut self, entry: RouteEntry) -> Self {
        self.routes.push(entry);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
