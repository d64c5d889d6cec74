//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML)          route dump (JSON)
//!     → loader.rs (parse)           → loader.rs (parse, key order kept)
//!     → validation.rs (semantic checks)
//!     → RouterSettings { data, .. } (validated, immutable)
//!     → handed to Router at construction
//! ```
//!
//! # Design Decisions
//! - Settings are immutable once a router is built
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_route_data, load_settings, ConfigError};
pub use schema::RouterSettings;
