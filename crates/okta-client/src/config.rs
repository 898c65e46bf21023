use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{self, PREVIEW_HOST, PRODUCTION_HOST};
use crate::error::{OktaError, OktaResult};

/// Which Okta domain an organization lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Preview,
}

impl Environment {
    #[must_use]
    pub const fn from_preview(preview: bool) -> Self {
        if preview {
            Self::Preview
        } else {
            Self::Production
        }
    }

    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_HOST,
            Self::Preview => PREVIEW_HOST,
        }
    }
}

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    pub token: String,
    /// Okta org id, e.g. `dev-1234`. Empty targets the bare host.
    pub organization: String,
    pub environment: Environment,
    /// Replaces the environment's domain verbatim when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &"<redacted>")
            .field("organization", &self.organization)
            .field("environment", &self.environment)
            .field("host", &self.host)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        token: impl Into<String>,
        organization: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            token: token.into(),
            organization: organization.into(),
            environment,
            host: None,
        }
    }

    /// Loads `OKTA_API_TOKEN`, `OKTA_ORG`, `OKTA_PREVIEW` and `OKTA_HOST`.
    pub fn from_env() -> OktaResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> OktaResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(constants::env::TOKEN)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| OktaError::Config(format!("{} is required", constants::env::TOKEN)))?;

        let mut config = Self::new(
            token,
            lookup(constants::env::ORGANIZATION)
                .map(|value| value.trim().to_string())
                .unwrap_or_default(),
            Environment::default(),
        );

        if let Some(value) = lookup(constants::env::PREVIEW) {
            match parse_bool(&value) {
                Some(preview) => config.environment = Environment::from_preview(preview),
                None => {
                    warn!(event = "config_invalid", field = constants::env::PREVIEW, value = %value);
                }
            }
        }

        config.host = lookup(constants::env::HOST)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        Ok(config)
    }

    #[must_use]
    pub fn resolved_host(&self) -> &str {
        self.host
            .as_deref()
            .unwrap_or_else(|| self.environment.host())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn environment_hosts() {
        assert_eq!(Environment::Production.host(), "okta.com");
        assert_eq!(Environment::Preview.host(), "oktapreview.com");
        assert_eq!(Environment::from_preview(true), Environment::Preview);
        assert_eq!(Environment::from_preview(false), Environment::Production);
    }

    #[test]
    fn from_lookup_requires_token() {
        let err = ClientConfig::from_lookup(lookup(&[("OKTA_ORG", "acme")]))
            .expect_err("missing token");
        assert!(matches!(err, OktaError::Config(_)));

        let err = ClientConfig::from_lookup(lookup(&[("OKTA_API_TOKEN", "   ")]))
            .expect_err("blank token");
        assert!(matches!(err, OktaError::Config(_)));
    }

    #[test]
    fn from_lookup_reads_all_fields() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("OKTA_API_TOKEN", "secret"),
            ("OKTA_ORG", " acme "),
            ("OKTA_PREVIEW", "off"),
            ("OKTA_HOST", "http://127.0.0.1:9000"),
        ]))
        .expect("config");

        assert_eq!(config.token, "secret");
        assert_eq!(config.organization, "acme");
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.resolved_host(), "http://127.0.0.1:9000");
    }

    #[test]
    fn invalid_preview_flag_keeps_default() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("OKTA_API_TOKEN", "secret"),
            ("OKTA_PREVIEW", "maybe"),
        ]))
        .expect("config");

        assert_eq!(config.environment, Environment::Preview);
        assert_eq!(config.resolved_host(), "oktapreview.com");
        assert!(config.organization.is_empty());
    }

    #[test]
    fn debug_redacts_token() {
        let config = ClientConfig::new("super-secret", "acme", Environment::Production);
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("acme"));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"token":"t","environment":"production"}"#).expect("parse");
        assert_eq!(config.environment, Environment::Production);
        assert!(config.organization.is_empty());
        assert!(config.host.is_none());
    }
}
