//! Path matching rules.
//!
//! # Responsibilities
//! - Turn a declared or requested path into a lookup key
//! - Apply case sensitivity and trailing-slash strictness
//!
//! # Design Decisions
//! - Defaults follow the browser router the gallery was built on:
//!   case-insensitive, trailing slash optional
//! - Declared paths and requested paths go through the same key function,
//!   so uniqueness is checked on exactly what lookup compares
//! - Exact match only (no params, no prefixes)

use serde::{Deserialize, Serialize};

/// Matching options shared by composition and lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Compare paths case-sensitively.
    pub sensitive: bool,

    /// Treat `/a` and `/a/` as different paths.
    pub strict: bool,
}

/// Normalizes paths into lookup keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathMatcher {
    options: MatchOptions,
}

impl PathMatcher {
    pub fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    /// Lookup key for `path`.
    pub fn key(&self, path: &str) -> String {
        let mut key = if self.options.strict {
            path
        } else {
            path.trim_end_matches('/')
        };
        if key.is_empty() {
            key = "/";
        }

        if self.options.sensitive {
            key.to_string()
        } else {
            key.to_lowercase()
        }
    }

    /// Returns true if both paths map to the same key.
    pub fn matches(&self, declared: &str, requested: &str) -> bool {
        self.key(declared) == self.key(requested)
    }
}
