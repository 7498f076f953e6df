//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check group names are present and unique
//! - Check observability and title settings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Route-level defects are left to registry composition

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::observability::logging;
use crate::routing::ROOT_GROUP;

/// A semantic problem in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("group #{index} has an empty name")]
    EmptyGroupName { index: usize },

    #[error("group name `{name}` is used more than once")]
    DuplicateGroupName { name: String },

    #[error("group name `{name}` is reserved for the root entry")]
    ReservedGroupName { name: String },

    #[error("unknown log level `{level}`")]
    UnknownLogLevel { level: String },

    #[error("title_prefix is set but title_separator is empty")]
    EmptySeparator,
}

/// Validate `config`, collecting every problem.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, group) in config.groups.iter().enumerate() {
        let name = group.name().trim();
        if name.is_empty() {
            errors.push(ValidationError::EmptyGroupName { index });
        } else if name == ROOT_GROUP {
            errors.push(ValidationError::ReservedGroupName { name: name.to_string() });
        } else if !seen.insert(name) {
            errors.push(ValidationError::DuplicateGroupName { name: name.to_string() });
        }
    }

    if !logging::is_valid_level(&config.observability.log_level) {
        errors.push(ValidationError::UnknownLogLevel {
            level: config.observability.log_level.clone(),
        });
    }

    if config.app.title_prefix.is_some() && config.app.title_separator.is_empty() {
        errors.push(ValidationError::EmptySeparator);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
