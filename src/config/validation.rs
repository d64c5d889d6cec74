//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the fallback scheme, host and base URL are usable as URL parts
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterSettings → Result<(), Vec<ValidationError>>
//! - Runs before settings are accepted into the system

use std::fmt;

use crate::config::schema::RouterSettings;

/// A single semantic problem with the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate router settings.
pub fn validate_settings(settings: &RouterSettings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !is_valid_scheme(&settings.fallback_scheme) {
        errors.push(ValidationError {
            field: "fallback_scheme",
            message: format!("'{}' is not a valid URL scheme", settings.fallback_scheme),
        });
    }

    let host = &settings.fallback_host;
    if host.contains("://") || host.contains('/') {
        errors.push(ValidationError {
            field: "fallback_host",
            message: format!("'{}' must be a bare host name", host),
        });
    }

    let base_url = &settings.fallback_base_url;
    if !base_url.is_empty() && !base_url.starts_with('/') {
        errors.push(ValidationError {
            field: "fallback_base_url",
            message: format!("'{}' must be empty or start with '/'", base_url),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
