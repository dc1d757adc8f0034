//! Adapter configuration supplied by the hosting application.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Reasons a host options object cannot produce an [`AdapterConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No options object was supplied.
    #[error("options object is missing")]
    MissingOptions,
    /// `appName` was absent or empty.
    #[error("`appName` is missing or empty")]
    MissingAppName,
    /// The options payload could not be decoded.
    #[error("invalid options object: {0}")]
    Invalid(String),
}

/// Immutable per-adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterConfig {
    /// Application name presented to the wallet when connecting.
    #[serde(default)]
    pub app_name: String,
    /// Deep link into the wallet's mobile app used when no embedded bridge is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magic_link: Option<String>,
}

impl AdapterConfig {
    /// Creates a config with the given application name and no magic link.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            magic_link: None,
        }
    }

    /// Sets the magic-link fallback.
    pub fn with_magic_link(mut self, magic_link: impl Into<String>) -> Self {
        self.magic_link = Some(magic_link.into());
        self
    }

    /// Decodes a raw host options object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the options are absent, malformed, or lack `appName`.
    pub fn from_options(options: Option<Value>) -> Result<Self, ConfigError> {
        let options = options
            .filter(|value| !value.is_null())
            .ok_or(ConfigError::MissingOptions)?;
        let config: Self =
            serde_json::from_value(options).map_err(|e| ConfigError::Invalid(e.to_string()))?;
        config.validated()
    }

    /// Checks required fields and normalizes a blank magic link to `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingAppName`] when `app_name` is empty.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        if self.app_name.is_empty() {
            return Err(ConfigError::MissingAppName);
        }
        self.magic_link = self
            .magic_link
            .take()
            .filter(|link| !link.trim().is_empty());
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn from_options_reads_camel_case_fields() {
        let config = AdapterConfig::from_options(Some(json!({
            "appName": "demo",
            "magicLink": "https://wallet.example/open",
            "somethingElse": true
        })))
        .expect("config");

        assert_eq!(
            config,
            AdapterConfig::new("demo").with_magic_link("https://wallet.example/open")
        );
    }

    #[test]
    fn from_options_rejects_missing_or_empty_app_name() {
        assert_eq!(
            AdapterConfig::from_options(None),
            Err(ConfigError::MissingOptions)
        );
        assert_eq!(
            AdapterConfig::from_options(Some(Value::Null)),
            Err(ConfigError::MissingOptions)
        );
        assert_eq!(
            AdapterConfig::from_options(Some(json!({"magicLink": "x"}))),
            Err(ConfigError::MissingAppName)
        );
        assert_eq!(
            AdapterConfig::from_options(Some(json!({"appName": ""}))),
            Err(ConfigError::MissingAppName)
        );
    }

    #[test]
    fn from_options_rejects_non_object_payload() {
        let err = AdapterConfig::from_options(Some(json!("demo"))).expect_err("should fail");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn blank_magic_link_is_treated_as_absent() {
        let config = AdapterConfig::new("demo")
            .with_magic_link("  ")
            .validated()
            .expect("valid");
        assert_eq!(config.magic_link, None);
    }
}
