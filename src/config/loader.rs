//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::{CompositionError, RouteRegistry};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    #[error(transparent)]
    Composition(#[from] CompositionError),
}

fn join(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content)?;

    tracing::info!(
        path = %path.display(),
        groups = config.groups.len(),
        root = config.root.is_some(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Load a configuration file and compose its route table.
pub fn load_registry(path: &Path) -> Result<(RouterConfig, RouteRegistry), ConfigError> {
    let config = load_config(path)?;
    let registry = RouteRegistry::from_config(&config)?;
    Ok((config, registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_registry() {
        let path = temp_file(
            "gallery-router-load",
            r#"
            [[groups]]
            name = "chapter5"

            [[groups.routes]]
            path = "/chapter5/1"
            view = "chapter5/Index"
            meta.title = "射线"
            "#,
        );

        let (config, registry) = load_registry(&path).unwrap();
        assert_eq!(config.groups[0].name(), "chapter5");
        assert_eq!(registry.resolve("/chapter5/1").unwrap().route().title(), Some("射线"));

        fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/gallery.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/gallery.toml"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[[groups]\nname = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_config("[observability]\nlog_level = \"chatty\"").unwrap_err();
        assert_eq!(err.to_string(), "Validation failed: unknown log level `chatty`");
    }

    #[test]
    fn test_composition_error() {
        let path = temp_file(
            "gallery-router-dup",
            r#"
            [[groups]]
            name = "a"
            [[groups.routes]]
            path = "/x"
            view = "X"

            [[groups]]
            name = "b"
            [[groups.routes]]
            path = "/x"
            view = "X2"
            "#,
        );

        let err = load_registry(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Composition(_)));

        fs::remove_file(&path).unwrap_or_default();
    }
}
