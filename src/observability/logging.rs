//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Pick the log level from the environment or the settings
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` overrides the configured level
//! - Diagnostics go to stderr so generated URLs stay alone on stdout

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::RouterSettings;

/// Filter directive derived from the settings.
pub fn default_directive(settings: &RouterSettings) -> String {
    let level = if settings.debug { "debug" } else { settings.log_level.as_str() };
    format!("url_generator={}", level)
}

/// Install the global subscriber. Later calls are ignored.
pub fn init_logging(settings: &RouterSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive() {
        let mut settings = RouterSettings::default();
        assert_eq!(default_directive(&settings), "url_generator=info");

        settings.log_level = "warn".into();
        assert_eq!(default_directive(&settings), "url_generator=warn");

        settings.debug = true;
        assert_eq!(default_directive(&settings), "url_generator=debug");
    }
}
