//! Client configuration: a single base-URL setting for the API host.

use serde::{Deserialize, Serialize};

/// Default API host, matching the development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "DISCIPLINE_API_BASE";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Read the base URL from the environment, falling back to the default.
    /// On wasm the variable is never set, so the default (or a value baked
    /// in by the build) applies.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:5000");
    }

    #[test]
    fn deserializes_with_missing_field() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ApiConfig::default());
    }
}
