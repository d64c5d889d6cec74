//! Client-side URL generation for server-defined routes.

pub mod config;
pub mod error;
pub mod observability;
pub mod page;
pub mod routing;

pub use config::RouterSettings;
pub use error::{RouterError, RouterResult};
pub use page::{PageContext, StaticPageContext};
pub use routing::{ParamValue, Parameters, RouteCollection, Router, UrlGenerator};
