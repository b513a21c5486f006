//! Configuration management for the OpenTrainer client
//!
//! This module handles loading, parsing, validating, and merging
//! configuration from a YAML file, environment variables, and CLI overrides.
//! The API base path varies across deployments, so it is always
//! configuration, never a constant.

use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

use crate::error::{OpenTrainerError, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote API settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Remote API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the OpenTrainer API, including any deployment prefix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// User agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8080/OpenTrainer".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("opentrainer/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from file with environment and CLI overrides
    ///
    /// # Arguments
    ///
    /// * `path` - Path to configuration file
    /// * `cli` - CLI arguments for overrides
    ///
    /// # Returns
    ///
    /// Returns the loaded and merged configuration
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read or parsed
    pub fn load(path: &str, cli: &crate::cli::Cli) -> Result<Self> {
        let mut config = if Path::new(path).exists() {
            Self::from_file(path)?
        } else {
            tracing::warn!("Config file not found at {}, using defaults", path);
            Self::default()
        };

        config.apply_env_vars();
        config.apply_cli_overrides(cli);

        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(OpenTrainerError::Io)?;
        Ok(serde_yaml::from_str(&contents).map_err(OpenTrainerError::Yaml)?)
    }

    fn apply_env_vars(&mut self) {
        if let Ok(base_url) = std::env::var("OPENTRAINER_API_URL") {
            self.api.base_url = base_url;
        }

        if let Ok(timeout) = std::env::var("OPENTRAINER_TIMEOUT_SECONDS") {
            if let Ok(value) = timeout.parse() {
                self.api.timeout_seconds = value;
            } else {
                tracing::warn!("Invalid OPENTRAINER_TIMEOUT_SECONDS: {}", timeout);
            }
        }

        if let Ok(user_agent) = std::env::var("OPENTRAINER_USER_AGENT") {
            self.api.user_agent = user_agent;
        }
    }

    fn apply_cli_overrides(&mut self, cli: &crate::cli::Cli) {
        if let Some(api_url) = &cli.api_url {
            self.api.base_url = api_url.clone();
        }
    }

    /// Validate the merged configuration
    ///
    /// # Errors
    ///
    /// Returns `OpenTrainerError::Config` if the base URL does not parse or
    /// the timeout is zero
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            OpenTrainerError::Config(format!("Invalid api.base_url {:?}: {}", self.api.base_url, e))
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(OpenTrainerError::Config(format!(
                "api.base_url must be http or https, got {:?}",
                url.scheme()
            ))
            .into());
        }

        if self.api.timeout_seconds == 0 {
            return Err(
                OpenTrainerError::Config("api.timeout_seconds must be non-zero".to_string()).into(),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_file, temp_dir};

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/OpenTrainer");
        assert_eq!(config.api.timeout_seconds, 30);
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_partial_yaml_fills_defaults() {
        let yaml = "api:\n  base_url: https://fit.example.com/api\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.api.base_url, "https://fit.example.com/api");
        assert_eq!(config.api.timeout_seconds, 30);
        assert!(config.api.user_agent.starts_with("opentrainer/"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = temp_dir();
        let path = create_test_file(
            &dir,
            "config.yaml",
            "api:\n  base_url: http://127.0.0.1:9999/OpenTrainer\n  timeout_seconds: 5\n",
        );
        let config =
            Config::load(path.to_str().unwrap(), &crate::cli::Cli::default()).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9999/OpenTrainer");
        assert_eq!(config.api.timeout_seconds, 5);
    }

    #[test]
    fn test_malformed_yaml_surfaces_yaml_error() {
        let dir = temp_dir();
        let path = create_test_file(&dir, "config.yaml", "api: [not a map");
        let err =
            Config::load(path.to_str().unwrap(), &crate::cli::Cli::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<OpenTrainerError>(),
            Some(OpenTrainerError::Yaml(_))
        ));
    }

    #[test]
    fn test_unreadable_path_surfaces_io_error() {
        // A directory exists but cannot be read as a file.
        let dir = temp_dir();
        let err = Config::load(
            dir.path().to_str().unwrap(),
            &crate::cli::Cli::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<OpenTrainerError>(),
            Some(OpenTrainerError::Io(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(
            "/nonexistent/opentrainer-config.yaml",
            &crate::cli::Cli::default(),
        )
        .unwrap();
        assert_eq!(config.api.base_url, default_base_url());
    }

    #[test]
    fn test_cli_override_wins() {
        let cli = crate::cli::Cli {
            api_url: Some("http://cli.example.com".to_string()),
            ..crate::cli::Cli::default()
        };
        let config = Config::load("/nonexistent/opentrainer-config.yaml", &cli).unwrap();
        assert_eq!(config.api.base_url, "http://cli.example.com");
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = Config {
            api: ApiConfig {
                base_url: "not a url".to_string(),
                ..ApiConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = Config {
            api: ApiConfig {
                base_url: "ftp://fit.example.com".to_string(),
                ..ApiConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            api: ApiConfig {
                timeout_seconds: 0,
                ..ApiConfig::default()
            },
        };
        assert!(config.validate().is_err());
    }
}
