//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Composition (at startup):
//!     RouteGroup[] (+ optional root redirect container)
//!     → registry.rs (concatenate in order, flatten children)
//!     → matcher.rs (normalize paths into lookup keys)
//!     → bind redirect parents to their target child
//!     → Freeze as immutable RouteRegistry
//!
//! Lookup (per navigation):
//!     path
//!     → matcher.rs (lookup key)
//!     → registry.rs (single map hit)
//!     → Return: RouteMatch (leaf + redirect source) or None
//! ```
//!
//! # Design Decisions
//! - Routes composed at startup, immutable at runtime
//! - Exact path matching only (no params, no regex)
//! - Deterministic: same input always composes the same table
//! - Defects reject the whole table; nothing is silently dropped

pub mod entry;
pub mod error;
pub mod group;
pub mod matcher;
pub mod registry;

pub use entry::{RouteEntry, RouteMeta, ViewKey};
pub use error::{CompositionError, Violation};
pub use group::RouteGroup;
pub use matcher::{MatchOptions, PathMatcher};
pub use registry::{CompositionOptions, ResolvedRoute, RouteMatch, RouteRegistry, ROOT_GROUP};
