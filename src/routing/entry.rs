//! Route entry data model.
//!
//! # Responsibilities
//! - Identify host-owned views by a stable opaque key
//! - Carry per-route metadata (title plus open-ended extra keys)
//! - Express the one-level redirect container (`redirect` + `children`)
//!
//! # Design Decisions
//! - Entries are plain data; nothing here resolves or validates
//! - Builders consume `self` so an entry is finished before it is grouped
//! - The view is never constructed or inspected, only carried

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key of a renderable view supplied by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewKey(String);

impl ViewKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ViewKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ViewKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Metadata attached to a route.
///
/// `title` is the only key the crate itself reads. Anything else declared
/// under `meta` lands in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RouteMeta {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            extra: BTreeMap::new(),
        }
    }

    /// Title, treating a blank string as absent.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.trim().is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }
}

/// A single declared route.
///
/// Either a leaf (`view` set, no children) or a redirect container
/// (`redirect` set, one level of `children`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    view: Option<ViewKey>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    redirect: Option<String>,

    #[serde(default)]
    meta: RouteMeta,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<RouteEntry>,
}

impl RouteEntry {
    /// Create a leaf route rendering `view`.
    pub fn new(path: impl Into<String>, view: impl Into<ViewKey>) -> Self {
        Self {
            path: path.into(),
            view: Some(view.into()),
            redirect: None,
            meta: RouteMeta::default(),
            children: Vec::new(),
        }
    }

    /// Create a redirect container: visiting `path` resolves to the child
    /// whose path is `target`.
    pub fn redirect(
        path: impl Into<String>,
        target: impl Into<String>,
        children: impl IntoIterator<Item = RouteEntry>,
    ) -> Self {
        Self {
            path: path.into(),
            view: None,
            redirect: Some(target.into()),
            meta: RouteMeta::default(),
            children: children.into_iter().collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.meta.title = Some(title.into());
        self
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.meta.extra.insert(key.into(), value.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn view(&self) -> Option<&ViewKey> {
        self.view.as_ref()
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title()
    }

    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect.as_deref()
    }

    pub fn children(&self) -> &[RouteEntry] {
        &self.children
    }

    pub fn is_container(&self) -> bool {
        self.redirect.is_some() || !self.children.is_empty()
    }
}

/// Join a child path onto its parent. Absolute child paths are kept as is.
pub fn join_path(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        return child.to_string();
    }
    if parent.ends_with('/') {
        format!("{}{}", parent, child)
    } else {
        format!("{}/{}", parent, child)
    }
}
