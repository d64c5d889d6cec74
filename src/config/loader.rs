//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

use crate::config::schema::RouterSettings;
use crate::config::validation::{validate_settings, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Route data error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate router settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<RouterSettings, ConfigError> {
    let content = fs::read_to_string(path)?;
    let settings: RouterSettings = toml::from_str(&content)?;

    validate_settings(&settings).map_err(ConfigError::Validation)?;

    Ok(settings)
}

/// Load a JSON route dump. Object key order is preserved.
pub fn load_route_data(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    let data = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "Route data loaded");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_settings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "force_https = true\nfallback_base_url = \"/app\"").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert!(settings.force_https);
        assert_eq!(settings.fallback_base_url, "/app");
    }

    #[test]
    fn test_load_settings_rejects_invalid() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fallback_scheme = \"1nvalid\"").unwrap();

        let err = load_settings(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().starts_with("Validation failed"));
    }

    #[test]
    fn test_load_route_data_keeps_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"routes": {{"b": {{}}, "a": {{}}}}}}"#).unwrap();

        let data = load_route_data(file.path()).unwrap();
        let keys: Vec<_> = data["routes"].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_route_data(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
