//! Router error definitions.

use thiserror::Error;

/// Fatal errors raised by the router.
///
/// Anything not listed here (empty route names, unknown routes, a missing
/// route table) is logged and answered with an empty result instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// A query was made before the route table was installed.
    #[error("The router is not initialized.")]
    NotInitialized,

    /// The route table was installed twice.
    #[error("The router is already initialized.")]
    AlreadyInitialized,

    /// A mandatory path variable had neither a value nor a default.
    #[error("The route '{route}' requires the parameter '{parameter}'.")]
    MissingParameter { route: String, parameter: String },

    /// A token that is neither text nor variable reached a substitution walk.
    #[error("Token {0} is not supported.")]
    UnsupportedToken(String),
}

/// Result type for router operations.
pub type RouterResult<T> = Result<T, RouterError>;
