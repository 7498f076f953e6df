//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::navigation::TitleFormat;
use crate::routing::{CompositionOptions, MatchOptions, RouteEntry, RouteGroup};

/// Root configuration for the gallery router.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Application-wide title settings.
    pub app: AppConfig,

    /// Path matching rules.
    pub matching: MatchOptions,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Optional redirect container placed before all groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<RouteEntry>,

    /// Route groups, in table order.
    pub groups: Vec<RouteGroup>,
}

impl RouterConfig {
    /// Options handed to registry composition.
    pub fn composition_options(&self) -> CompositionOptions {
        CompositionOptions {
            matching: self.matching,
            require_titles: self.app.require_titles,
        }
    }
}

/// Title configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Application name placed before every route title.
    pub title_prefix: Option<String>,

    /// Text between prefix and route title.
    pub title_separator: String,

    /// Title used for routes without one. Unset keeps the previous title.
    pub fallback_title: Option<String>,

    /// Reject leaf routes that declare no title.
    pub require_titles: bool,
}

impl AppConfig {
    pub fn title_format(&self) -> TitleFormat {
        TitleFormat {
            prefix: self.title_prefix.clone(),
            separator: self.title_separator.clone(),
            fallback: self.fallback_title.clone(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let format = TitleFormat::default();
        Self {
            title_prefix: format.prefix,
            title_separator: format.separator,
            fallback_title: format.fallback,
            require_titles: false,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config() {
        let config: RouterConfig = toml::from_str(
            r#"
            [[groups]]
            name = "chapter4"

            [[groups.routes]]
            path = "/chapter4/MeshBasicMaterial"
            view = "chapter4/MeshBasicMaterial"
            meta.title = "基础网格材质"
            "#,
        )
        .unwrap();

        assert_eq!(config.groups.len(), 1);
        assert_eq!(config.groups[0].routes()[0].title(), Some("基础网格材质"));
        assert!(config.root.is_none());
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.app.title_format(), TitleFormat::default());
        assert_eq!(config.composition_options(), CompositionOptions::default());
    }

    #[test]
    fn test_full_config() {
        let config: RouterConfig = toml::from_str(
            r#"
            [app]
            title_prefix = "Gallery"
            title_separator = " | "
            fallback_title = "Gallery"
            require_titles = true

            [matching]
            sensitive = true

            [root]
            path = "/"
            redirect = "/demo/c"

            [[root.children]]
            path = "/demo/c"
            view = "demo/C"
            meta.title = "C"
            "#,
        )
        .unwrap();

        let format = config.app.title_format();
        assert_eq!(format.outcome(Some("C")).title(), Some("Gallery | C"));
        assert!(config.matching.sensitive);
        assert!(!config.matching.strict);
        assert!(config.composition_options().require_titles);
        assert_eq!(config.root.unwrap().children().len(), 1);
    }
}
