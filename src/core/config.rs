//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Login page of the external auth provider
    /// Example: https://auth.example.com/login
    pub auth_provider_url: Option<String>,

    /// Public origin of this site, used for the post-login redirect
    /// Example: https://flipcut.app
    pub public_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("AUTH_PROVIDER_URL").ok(),
            std::env::var("PUBLIC_URL").ok(),
        )
    }

    /// Build a config from raw values; blank values count as unset
    pub fn from_vars(auth_provider_url: Option<String>, public_url: Option<String>) -> Self {
        let clean = |value: Option<String>| {
            value
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            auth_provider_url: clean(auth_provider_url),
            public_url: clean(public_url),
        }
    }

    /// Check if an auth provider is configured
    pub fn has_auth_provider(&self) -> bool {
        self.auth_provider_url.is_some()
    }

    /// Public origin, falling back to the address the server listens on
    pub fn public_url_or(&self, site_addr: &str) -> String {
        self.public_url
            .clone()
            .unwrap_or_else(|| format!("http://{}", site_addr))
    }

    /// Fill in the public URL from the listen address when it is not set
    pub fn with_site_addr(mut self, site_addr: &str) -> Self {
        if self.public_url.is_none() {
            self.public_url = Some(format!("http://{}", site_addr));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_vars(
            Some("https://auth.example.com/login".to_string()),
            Some("https://flipcut.app".to_string()),
        );

        assert_eq!(
            config.auth_provider_url,
            Some("https://auth.example.com/login".to_string())
        );
        assert_eq!(config.public_url, Some("https://flipcut.app".to_string()));
        assert!(config.has_auth_provider());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_vars(None, None);

        assert!(config.auth_provider_url.is_none());
        assert!(config.public_url.is_none());
        assert!(!config.has_auth_provider());
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = Config::from_vars(Some("   ".to_string()), Some(String::new()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = Config::from_vars(None, Some("https://flipcut.app/".to_string()));
        assert_eq!(config.public_url.as_deref(), Some("https://flipcut.app"));
    }

    #[test]
    fn test_public_url_fallback() {
        let config = Config::default();
        assert_eq!(config.public_url_or("127.0.0.1:3000"), "http://127.0.0.1:3000");

        let config = config.with_site_addr("0.0.0.0:8080");
        assert_eq!(config.public_url.as_deref(), Some("http://0.0.0.0:8080"));
    }

    #[test]
    fn test_with_site_addr_keeps_explicit_public_url() {
        let config = Config::from_vars(None, Some("https://flipcut.app".to_string()))
            .with_site_addr("127.0.0.1:3000");
        assert_eq!(config.public_url.as_deref(), Some("https://flipcut.app"));
    }
}
