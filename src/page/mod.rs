//! Page context subsystem.
//!
//! # Responsibilities
//! - Expose the current page's protocol, host name, path and query
//! - Turn relative, fragment and query-only paths into absolute URLs
//!
//! # Design Decisions
//! - Injected as a trait object, never read from globals
//! - Never written to by the router

pub mod absolute;
pub mod context;

pub use absolute::absolute_url;
pub use context::{PageContext, StaticPageContext};
