//! Route registry: composition and lookup.
//!
//! # Responsibilities
//! - Concatenate route groups, root first, in the order given
//! - Flatten redirect containers and bind each parent to its target child
//! - Reject defective tables (duplicates, dangling redirects, missing views)
//! - Look up a path and return the resolved leaf route
//!
//! # Design Decisions
//! - Composition is a pure function of its inputs; the result is immutable
//! - Redirects are bound at composition, so lookup is a single map hit
//! - Every violation is collected before rejecting, not just the first
//! - Redirect containers nest one level only

use std::collections::HashMap;

use crate::config::RouterConfig;
use crate::navigation::{Location, NavigationError};
use crate::routing::entry::{join_path, RouteEntry, RouteMeta, ViewKey};
use crate::routing::error::{CompositionError, Violation};
use crate::routing::group::RouteGroup;
use crate::routing::matcher::{MatchOptions, PathMatcher};

/// Group name reported for the root entry.
pub const ROOT_GROUP: &str = "root";

/// Options controlling composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositionOptions {
    /// Path matching rules for uniqueness and lookup.
    pub matching: MatchOptions,

    /// Reject leaf routes without a title.
    pub require_titles: bool,
}

/// An addressable leaf route in the composed table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoute {
    path: String,
    group: String,
    view: ViewKey,
    entry: RouteEntry,
}

impl ResolvedRoute {
    /// Full path, with relative child paths joined to their parent.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name of the group that declared this route.
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn view(&self) -> &ViewKey {
        &self.view
    }

    pub fn meta(&self) -> &RouteMeta {
        self.entry.meta()
    }

    pub fn title(&self) -> Option<&str> {
        self.entry.title()
    }

    pub fn entry(&self) -> &RouteEntry {
        &self.entry
    }
}

/// Result of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteMatch<'a> {
    route: &'a ResolvedRoute,
    redirected_from: Option<&'a str>,
}

impl<'a> RouteMatch<'a> {
    pub fn route(&self) -> &'a ResolvedRoute {
        self.route
    }

    /// Container path the lookup was redirected from, if any.
    pub fn redirected_from(&self) -> Option<&'a str> {
        self.redirected_from
    }

    pub fn is_redirect(&self) -> bool {
        self.redirected_from.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Binding {
    route: usize,
    redirected_from: Option<String>,
}

/// The composed, immutable route table.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRegistry {
    entries: Vec<RouteEntry>,
    routes: Vec<ResolvedRoute>,
    bindings: HashMap<String, Binding>,
    matcher: PathMatcher,
}

impl RouteRegistry {
    /// Compose with default options.
    pub fn compose(
        groups: &[RouteGroup],
        root: Option<&RouteEntry>,
    ) -> Result<Self, CompositionError> {
        Self::compose_with(groups, root, CompositionOptions::default())
    }

    /// Compose `root` followed by `groups` into a single table.
    pub fn compose_with(
        groups: &[RouteGroup],
        root: Option<&RouteEntry>,
        options: CompositionOptions,
    ) -> Result<Self, CompositionError> {
        let mut assembler = Assembler::new(options);

        if let Some(root) = root {
            assembler.add_top_level(ROOT_GROUP, root);
        }
        for group in groups {
            for entry in group.routes() {
                assembler.add_top_level(group.name(), entry);
            }
        }

        let registry = assembler.finish()?;
        tracing::info!(
            groups = groups.len(),
            root = root.is_some(),
            routes = registry.routes.len(),
            "Route registry composed"
        );
        Ok(registry)
    }

    /// Compose the root entry and groups declared in `config`.
    pub fn from_config(config: &RouterConfig) -> Result<Self, CompositionError> {
        Self::compose_with(&config.groups, config.root.as_ref(), config.composition_options())
    }

    /// Look up `path`, following a container redirect if one is bound.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        let binding = self.bindings.get(&self.matcher.key(path))?;
        Some(RouteMatch {
            route: &self.routes[binding.route],
            redirected_from: binding.redirected_from.as_deref(),
        })
    }

    /// Parse a navigation target and look up its path. Query and fragment
    /// take no part in matching.
    pub fn resolve_target(&self, target: &str) -> Result<RouteMatch<'_>, NavigationError> {
        let location = Location::parse(target)?;
        self.resolve(location.path()).ok_or_else(|| NavigationError::NotFound {
            path: location.path().to_string(),
        })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.bindings.contains_key(&self.matcher.key(path))
    }

    /// Addressable leaf routes in table order.
    pub fn routes(&self) -> &[ResolvedRoute] {
        &self.routes
    }

    /// Top-level entries as declared, root first.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Redirect bindings as `(container path, target path)` in table order.
    pub fn redirects(&self) -> Vec<(&str, &str)> {
        let mut redirects: Vec<_> = self
            .bindings
            .values()
            .filter_map(|b| {
                b.redirected_from
                    .as_deref()
                    .map(|from| (b.route, from, self.routes[b.route].path()))
            })
            .collect();
        redirects.sort_by_key(|(route, _, _)| *route);
        redirects.into_iter().map(|(_, from, to)| (from, to)).collect()
    }

    pub fn matcher(&self) -> PathMatcher {
        self.matcher
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Accumulates a table while collecting violations.
struct Assembler {
    options: CompositionOptions,
    matcher: PathMatcher,
    entries: Vec<RouteEntry>,
    routes: Vec<ResolvedRoute>,
    bindings: HashMap<String, Binding>,
    owners: HashMap<String, String>,
    violations: Vec<Violation>,
}

impl Assembler {
    fn new(options: CompositionOptions) -> Self {
        Self {
            options,
            matcher: PathMatcher::new(options.matching),
            entries: Vec::new(),
            routes: Vec::new(),
            bindings: HashMap::new(),
            owners: HashMap::new(),
            violations: Vec::new(),
        }
    }

    fn add_top_level(&mut self, group: &str, entry: &RouteEntry) {
        self.entries.push(entry.clone());

        if entry.path().is_empty() {
            self.violations.push(Violation::EmptyPath { group: group.to_string() });
            return;
        }
        if !entry.path().starts_with('/') {
            self.violations.push(Violation::RelativePath {
                group: group.to_string(),
                path: entry.path().to_string(),
            });
            return;
        }

        if entry.is_container() {
            self.add_container(group, entry);
        } else {
            self.add_leaf(group, entry.path().to_string(), entry);
        }
    }

    fn add_container(&mut self, group: &str, entry: &RouteEntry) {
        let parent = entry.path();

        let Some(target) = entry.redirect_target() else {
            self.violations.push(Violation::ChildrenWithoutRedirect {
                group: group.to_string(),
                path: parent.to_string(),
            });
            return;
        };
        if entry.children().is_empty() {
            self.violations.push(Violation::RedirectWithoutChildren {
                group: group.to_string(),
                path: parent.to_string(),
                target: target.to_string(),
            });
            return;
        }

        let target_key = self.matcher.key(&join_path(parent, target));
        let mut target_route = None;

        for child in entry.children() {
            if child.path().is_empty() {
                self.violations.push(Violation::EmptyPath { group: group.to_string() });
                continue;
            }
            let full_path = join_path(parent, child.path());
            if child.is_container() {
                self.violations.push(Violation::NestedTooDeep {
                    group: group.to_string(),
                    path: full_path,
                });
                continue;
            }
            let is_target = self.matcher.key(&full_path) == target_key;
            if let Some(index) = self.add_leaf(group, full_path, child) {
                if is_target && target_route.is_none() {
                    target_route = Some(index);
                }
            }
        }

        let Some(route) = target_route else {
            // A target that exists but was itself rejected is already reported.
            let reported = entry
                .children()
                .iter()
                .any(|c| self.matcher.key(&join_path(parent, c.path())) == target_key);
            if !reported {
                self.violations.push(Violation::DanglingRedirect {
                    group: group.to_string(),
                    path: parent.to_string(),
                    target: target.to_string(),
                });
            }
            return;
        };

        if self.claim(group, parent) {
            tracing::debug!(from = %parent, to = %self.routes[route].path(), "Redirect bound");
            self.bindings.insert(
                self.matcher.key(parent),
                Binding {
                    route,
                    redirected_from: Some(parent.to_string()),
                },
            );
        }
    }

    /// Admit a leaf route; returns its index in the table.
    fn add_leaf(&mut self, group: &str, path: String, entry: &RouteEntry) -> Option<usize> {
        let view = entry.view().filter(|v| !v.is_empty()).cloned();
        if view.is_none() {
            self.violations.push(Violation::MissingView {
                group: group.to_string(),
                path: path.clone(),
            });
        }
        let titled = !self.options.require_titles || entry.title().is_some();
        if !titled {
            self.violations.push(Violation::MissingTitle {
                group: group.to_string(),
                path: path.clone(),
            });
        }
        let claimed = self.claim(group, &path);
        let view = view.filter(|_| titled && claimed)?;

        let index = self.routes.len();
        self.bindings.insert(
            self.matcher.key(&path),
            Binding {
                route: index,
                redirected_from: None,
            },
        );
        self.routes.push(ResolvedRoute {
            path,
            group: group.to_string(),
            view,
            entry: entry.clone(),
        });
        Some(index)
    }

    /// Reserve the lookup key for `path`, recording a duplicate otherwise.
    fn claim(&mut self, group: &str, path: &str) -> bool {
        // Declared paths must survive the same parse navigation targets go through.
        let canonical = Location::parse(path).ok().map(|l| l.path().to_string());
        if canonical.as_deref() != Some(path) {
            self.violations.push(Violation::NonCanonicalPath {
                group: group.to_string(),
                path: path.to_string(),
                canonical,
            });
            return false;
        }
        let key = self.matcher.key(path);
        if let Some(first_group) = self.owners.get(&key) {
            self.violations.push(Violation::DuplicatePath {
                path: path.to_string(),
                first_group: first_group.clone(),
                second_group: group.to_string(),
            });
            return false;
        }
        self.owners.insert(key, group.to_string());
        true
    }

    fn finish(self) -> Result<RouteRegistry, CompositionError> {
        if !self.violations.is_empty() {
            tracing::error!(violations = self.violations.len(), "Route table rejected");
            return Err(CompositionError::new(self.violations));
        }
        Ok(RouteRegistry {
            entries: self.entries,
            routes: self.routes,
            bindings: self.bindings,
            matcher: self.matcher,
        })
    }
}
