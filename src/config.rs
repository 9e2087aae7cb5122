// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_service_url")]
    pub service_url: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: AppConfig,
    production: AppConfig,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn pick_environment(
    ats_env: Option<String>,
    environment: Option<String>,
    env: Option<String>,
) -> String {
    ats_env
        .or(environment)
        .or(env)
        .unwrap_or_else(|| "local".to_string())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_url: default_service_url(),
            request_timeout_secs: None,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Load configuration for the current environment.
    ///
    /// An explicit path must exist. Otherwise `./config.yaml` is used when
    /// present, and built-in defaults when not. `ATS_SERVICE_URL` wins over both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::resolve(
            path,
            Path::new(DEFAULT_CONFIG_FILE),
            &Self::environment(),
            std::env::var("ATS_SERVICE_URL").ok(),
        )
    }

    fn resolve(
        path: Option<&Path>,
        default_path: &Path,
        environment: &str,
        env_url: Option<String>,
    ) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path, environment)?,
            None if default_path.exists() => Self::load_from_file(default_path, environment)?,
            None => Self::default(),
        };

        Ok(config.with_service_url(env_url))
    }

    /// `ATS_ENV`, then `ENVIRONMENT`, then `ENV`, else `local`
    pub fn environment() -> String {
        pick_environment(
            std::env::var("ATS_ENV").ok(),
            std::env::var("ENVIRONMENT").ok(),
            std::env::var("ENV").ok(),
        )
    }

    fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_yaml(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Pick the section for `environment`; anything but `production` is local
    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile = serde_yaml::from_str(content)?;

        let mut config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        if let Some(log_file) = &config.log_file {
            config.log_file = Some(Self::resolve_path(log_file)?);
        }

        Ok(config)
    }

    fn resolve_path(path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }

    pub fn with_service_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.service_url = url;
        }
        self
    }
}
