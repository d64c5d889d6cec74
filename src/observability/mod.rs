//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! parser.rs, router.rs
//!     → tracing events (warn: dropped tokens, unknown routes, scheme fallback;
//!                       debug: generated paths and URLs)
//!     → logging.rs subscriber (stderr)
//! ```
//!
//! # Design Decisions
//! - Non-fatal anomalies are warnings, never errors returned to the caller
//! - The library only emits events; installing a subscriber is the binary's job

pub mod logging;

pub use logging::init_logging;
