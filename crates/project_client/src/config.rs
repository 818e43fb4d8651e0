//! Client configuration.

/// Default local storage key for the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Configuration for the project board client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every request path (default: "", same origin)
    pub base_url: String,
    /// Storage key the bearer token is kept under (default: "token")
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            token_key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at another origin.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_same_origin() {
        let config = ClientConfig::default();

        assert_eq!(config.url("/projects"), "/projects");
        assert_eq!(config.token_key, "token");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = ClientConfig::with_base_url("http://localhost:5970/");

        assert_eq!(config.url("/token"), "http://localhost:5970/token");
    }
}
