use std::sync::LazyLock;

use thiserror::Error;

pub const SERVICE_ID_KEY: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_KEY: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_KEY: &str = "EMAILJS_PUBLIC_KEY";
pub const APP_NAME_KEY: &str = "APP_NAME";
pub const APP_URL_KEY: &str = "APP_URL";

// Embedded at compile time so the server binary and the WASM bundle agree.
const BUILD_ENV: [(&str, Option<&str>); 5] = [
    (SERVICE_ID_KEY, option_env!("EMAILJS_SERVICE_ID")),
    (TEMPLATE_ID_KEY, option_env!("EMAILJS_TEMPLATE_ID")),
    (PUBLIC_KEY_KEY, option_env!("EMAILJS_PUBLIC_KEY")),
    (APP_NAME_KEY, option_env!("APP_NAME")),
    (APP_URL_KEY, option_env!("APP_URL")),
];

static SITE_CONFIG: LazyLock<Result<SiteConfig, ConfigError>> =
    LazyLock::new(SiteConfig::from_build_env);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "Missing required environment variable: {0}. Export {0} before running `cargo leptos build` (see .env.example)."
    )]
    Missing(&'static str),
}

/// Identifiers for the EmailJS relay. All three are opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub emailjs: EmailJsCredentials,
    pub app_name: String,
    pub app_url: String,
}

impl SiteConfig {
    /// Resolves every key through `lookup`, failing on the first one that is
    /// absent or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        Ok(Self {
            emailjs: EmailJsCredentials {
                service_id: required(SERVICE_ID_KEY)?,
                template_id: required(TEMPLATE_ID_KEY)?,
                public_key: required(PUBLIC_KEY_KEY)?,
            },
            app_name: required(APP_NAME_KEY)?,
            app_url: required(APP_URL_KEY)?,
        })
    }

    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            BUILD_ENV
                .iter()
                .find(|(k, _)| *k == key)
                .and_then(|(_, v)| v.map(str::to_string))
        })
    }

    /// The configuration baked into this build, validated once.
    pub fn global() -> Result<&'static SiteConfig, ConfigError> {
        SITE_CONFIG.as_ref().map_err(Clone::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, String> {
        HashMap::from([
            (SERVICE_ID_KEY, "service_abc".to_string()),
            (TEMPLATE_ID_KEY, "template_xyz".to_string()),
            (PUBLIC_KEY_KEY, "pk_123".to_string()),
            (APP_NAME_KEY, "Portafolio".to_string()),
            (APP_URL_KEY, "https://example.com".to_string()),
        ])
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<SiteConfig, ConfigError> {
        SiteConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_loads_all_keys() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.emailjs.service_id, "service_abc");
        assert_eq!(config.emailjs.template_id, "template_xyz");
        assert_eq!(config.emailjs.public_key, "pk_123");
        assert_eq!(config.app_name, "Portafolio");
        assert_eq!(config.app_url, "https://example.com");
    }

    #[test]
    fn test_missing_service_id_names_the_key() {
        let mut env = full_env();
        env.remove(SERVICE_ID_KEY);

        let err = load(&env).unwrap_err();
        assert_eq!(err, ConfigError::Missing("EMAILJS_SERVICE_ID"));
        assert!(err.to_string().contains("EMAILJS_SERVICE_ID"));
    }

    #[test]
    fn test_missing_key_message_asks_for_an_export() {
        let err = ConfigError::Missing(APP_URL_KEY);
        let message = err.to_string();
        assert!(message.contains("Export APP_URL before running `cargo leptos build`"), "{message}");
        assert!(!message.contains("Set APP_URL"), "{message}");
    }

    #[test]
    fn test_blank_value_counts_as_missing() {
        let mut env = full_env();
        env.insert(PUBLIC_KEY_KEY, "   ".to_string());
        assert_eq!(load(&env), Err(ConfigError::Missing(PUBLIC_KEY_KEY)));
    }

    #[test]
    fn test_first_missing_key_is_reported() {
        let mut env = full_env();
        env.remove(TEMPLATE_ID_KEY);
        env.remove(APP_URL_KEY);
        assert_eq!(load(&env), Err(ConfigError::Missing(TEMPLATE_ID_KEY)));
    }
}
