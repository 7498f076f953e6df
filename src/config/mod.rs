//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → RouteRegistry::from_config (route-level checks, composition)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All sections have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_registry, parse_config, ConfigError};
pub use schema::{AppConfig, ObservabilityConfig, RouterConfig};
pub use validation::{validate_config, ValidationError};
