//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (once, at initialisation):
//!     raw route dump (serde_json::Value)
//!     → parser.rs (tokens, defaults, requirements, collection scheme)
//!     → RouteCollection (immutable, installed in Router)
//!
//! Generation:
//!     name + Parameters
//!     → router.rs (route lookup)
//!     → path.rs (reverse token walk)  → query.rs (leftover parameters)
//!     → host.rs (host tokens + scheme precedence, url() only)
//!     → String
//! ```
//!
//! # Design Decisions
//! - Routes compiled at initialisation, immutable afterwards
//! - Generation only; incoming requests are never matched
//! - First route with a given name wins

pub mod collection;
pub mod encoding;
pub mod host;
pub mod params;
pub mod parser;
pub mod path;
pub mod query;
pub mod route;
pub mod router;
pub mod token;

pub use collection::RouteCollection;
pub use params::{ParamValue, Parameters};
pub use route::Route;
pub use router::{Router, UrlGenerator};
pub use token::Token;
