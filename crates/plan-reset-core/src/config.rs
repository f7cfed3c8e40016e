//! Reset configuration
//!
//! Sourced once from the environment by the binary and passed down explicitly.

use std::fmt;

use url::Url;

use crate::constants;
use crate::error::ResetError;

/// Where to send the reset and how to authenticate it
#[derive(Clone)]
pub struct ResetConfig {
    /// Backend project URL, e.g. `https://<ref>.supabase.co`
    pub project_url: String,
    /// Resource collection the bulk update targets
    pub table: String,
    /// API key; empty means the backend will reject the request
    pub api_key: String,
}

impl Default for ResetConfig {
    fn default() -> Self {
        Self {
            project_url: constants::backend::DEFAULT_PROJECT_URL.to_string(),
            table: constants::backend::PLANS_TABLE.to_string(),
            api_key: String::new(),
        }
    }
}

impl fmt::Debug for ResetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResetConfig")
            .field("project_url", &self.project_url)
            .field("table", &self.table)
            .field("api_key", &if self.has_credential() { "<redacted>" } else { "<empty>" })
            .finish()
    }
}

impl ResetConfig {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// Unset or blank `SUPABASE_URL` keeps the default project.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self {
            api_key: lookup(constants::env::API_KEY).unwrap_or_default(),
            ..Self::default()
        };

        if let Some(url) = lookup(constants::env::PROJECT_URL) {
            let url = url.trim();
            if !url.is_empty() {
                config.project_url = url.to_string();
            }
        }

        config
    }

    /// Whether a non-empty API key is configured
    pub fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Full URL of the resource collection: `<project>/rest/v1/<table>`
    pub fn endpoint_url(&self) -> Result<Url, ResetError> {
        let base = format!(
            "{}/{}/{}",
            self.project_url.trim_end_matches('/'),
            constants::backend::REST_PATH,
            self.table
        );
        Ok(Url::parse(&base)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_missing_key_is_empty() {
        let config = ResetConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_key, "");
        assert!(!config.has_credential());
        assert_eq!(config.project_url, constants::backend::DEFAULT_PROJECT_URL);
        assert_eq!(config.table, "user_active_plans");
    }

    #[test]
    fn test_key_and_url_override() {
        let config = ResetConfig::from_lookup(lookup_from(&[
            ("SUPABASE_KEY", "secret"),
            ("SUPABASE_URL", "http://127.0.0.1:54321/"),
        ]));
        assert!(config.has_credential());
        assert_eq!(
            config.endpoint_url().unwrap().as_str(),
            "http://127.0.0.1:54321/rest/v1/user_active_plans"
        );
    }

    #[test]
    fn test_blank_url_keeps_default() {
        let config = ResetConfig::from_lookup(lookup_from(&[("SUPABASE_URL", "  ")]));
        assert_eq!(config.project_url, constants::backend::DEFAULT_PROJECT_URL);
    }

    #[test]
    fn test_default_endpoint() {
        let url = ResetConfig::default().endpoint_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://f8224a53-b155-4576-b4ef-bf2eb4b7f6bf.supabase.co/rest/v1/user_active_plans"
        );
    }

    #[test]
    fn test_invalid_project_url() {
        let config = ResetConfig {
            project_url: "not a url".to_string(),
            ..ResetConfig::default()
        };
        assert!(matches!(
            config.endpoint_url(),
            Err(ResetError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = ResetConfig {
            api_key: "super-secret".to_string(),
            ..ResetConfig::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
