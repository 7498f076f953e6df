//! Composition errors.

use thiserror::Error;

/// One defect found in a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("route in group `{group}` has an empty path")]
    EmptyPath { group: String },

    #[error("route `{path}` in group `{group}` must start with `/`")]
    RelativePath { group: String, path: String },

    #[error("route `{path}` in group `{group}` is not a canonical URL path{}", reached_as(.canonical))]
    NonCanonicalPath {
        group: String,
        path: String,
        canonical: Option<String>,
    },

    #[error("route `{path}` in group `{group}` has no view")]
    MissingView { group: String, path: String },

    #[error("route `{path}` in group `{group}` has no title")]
    MissingTitle { group: String, path: String },

    #[error("path `{path}` is declared in group `{first_group}` and again in group `{second_group}`")]
    DuplicatePath {
        path: String,
        first_group: String,
        second_group: String,
    },

    #[error("`{path}` in group `{group}` redirects to `{target}`, which is not one of its children")]
    DanglingRedirect {
        group: String,
        path: String,
        target: String,
    },

    #[error("`{path}` in group `{group}` redirects to `{target}` but declares no children")]
    RedirectWithoutChildren {
        group: String,
        path: String,
        target: String,
    },

    #[error("`{path}` in group `{group}` declares children without a redirect")]
    ChildrenWithoutRedirect { group: String, path: String },

    #[error("`{path}` in group `{group}` nests below a child route; only one level is supported")]
    NestedTooDeep { group: String, path: String },
}

/// Rejected composition, carrying every violation found.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("route table rejected with {} violation(s): {}", .violations.len(), join(.violations))]
pub struct CompositionError {
    violations: Vec<Violation>,
}

impl CompositionError {
    pub(crate) fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn reached_as(canonical: &Option<String>) -> String {
    match canonical {
        Some(path) => format!(" (navigates as `{}`)", path),
        None => " (leaves the application origin)".to_string(),
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
