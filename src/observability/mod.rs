//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Composition and navigation produce:
//!     → logging.rs (structured log events via `tracing`)
//!     → metrics.rs (counters via the `metrics` facade)
//!
//! Consumers:
//!     → Whatever subscriber / recorder the host installs
//! ```
//!
//! # Design Decisions
//! - Library code only emits; installing a subscriber is the binary's job
//! - Counters are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
