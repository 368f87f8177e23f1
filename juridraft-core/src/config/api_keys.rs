//! API key retrieval from environment variables, .env files and the
//! configuration file.
//!
//! Environment variables win over the configuration file so that keys never
//! need to be committed alongside `juridraft.toml`.

use super::constants::gemini;
use anyhow::Result;
use std::env;

/// Where to look for the Gemini API key
#[derive(Debug, Clone)]
pub struct ApiKeySources {
    /// Primary environment variable name
    pub env_var: String,
    /// Secondary environment variable, checked when the primary is unset
    pub fallback_env_var: String,
    /// Key taken from the configuration file
    pub config_value: Option<String>,
}

impl Default for ApiKeySources {
    fn default() -> Self {
        Self {
            env_var: gemini::API_KEY_ENV.to_string(),
            fallback_env_var: gemini::FALLBACK_API_KEY_ENV.to_string(),
            config_value: None,
        }
    }
}

impl ApiKeySources {
    pub fn with_env_var(env_var: impl Into<String>) -> Self {
        Self {
            env_var: env_var.into(),
            ..Self::default()
        }
    }

    pub fn with_config_value(mut self, value: Option<String>) -> Self {
        self.config_value = value;
        self
    }

    /// Resolve the key with a custom variable lookup
    pub fn resolve_with<F>(&self, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in [self.env_var.as_str(), self.fallback_env_var.as_str()] {
            if let Some(key) = lookup(name) {
                if !key.is_empty() {
                    return Ok(key);
                }
            }
        }

        if let Some(key) = &self.config_value {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }

        Err(anyhow::anyhow!(
            "No Gemini API key found. Set {} or {} (or add it to a .env file) or configure api_key in juridraft.toml",
            self.env_var,
            self.fallback_env_var
        ))
    }
}

/// Load environment variables from a .env file in the current directory.
///
/// A missing file is fine; a malformed one is reported and ignored.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment variables");
            Ok(())
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load .env file");
            Ok(())
        }
    }
}

/// Get the Gemini API key from the process environment, then the config value
pub fn get_api_key(sources: &ApiKeySources) -> Result<String> {
    sources.resolve_with(|name| env::var(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn primary_env_var_wins() {
        let sources = ApiKeySources::default().with_config_value(Some("from-config".into()));
        let key = sources
            .resolve_with(lookup(&[("GEMINI_API_KEY", "primary"), ("GOOGLE_API_KEY", "fallback")]))
            .unwrap();
        assert_eq!(key, "primary");
    }

    #[test]
    fn falls_back_to_google_key_then_config() {
        let sources = ApiKeySources::default().with_config_value(Some("from-config".into()));
        let key = sources
            .resolve_with(lookup(&[("GOOGLE_API_KEY", "fallback")]))
            .unwrap();
        assert_eq!(key, "fallback");

        let key = sources
            .resolve_with(lookup(&[("GEMINI_API_KEY", "")]))
            .unwrap();
        assert_eq!(key, "from-config");
    }

    #[test]
    fn custom_env_var_is_used() {
        let sources = ApiKeySources::with_env_var("JURIDRAFT_KEY");
        let key = sources
            .resolve_with(lookup(&[("JURIDRAFT_KEY", "custom")]))
            .unwrap();
        assert_eq!(key, "custom");
    }

    #[test]
    fn missing_key_names_the_variable() {
        let err = ApiKeySources::default()
            .resolve_with(lookup(&[]))
            .unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
