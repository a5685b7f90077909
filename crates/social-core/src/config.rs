//! Configuration management for the social agent
//!
//! Everything is read from the process environment once at startup. A `.env`
//! file is merged in beforehand by the binary; variables already set win.

use crate::constants::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL, DEFAULT_OPENAI_TIMEOUT_SECS};
use crate::error::{Result, SocialError};
use crate::paths::DEFAULT_STORE_ROOT;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Raw environment values, keys lowercased by the `config` crate
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    #[serde(default)]
    openai_api_key: Option<String>,

    #[serde(default)]
    openai_model: Option<String>,

    #[serde(default)]
    openai_base_url: Option<String>,

    #[serde(default)]
    openai_timeout_secs: Option<String>,

    #[serde(default)]
    social_media_db: Option<String>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialConfig {
    /// Present only when a credential is configured
    pub openai: Option<OpenAIConfig>,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIConfig {
    pub api_key: String,
    pub model: String,

    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl OpenAIConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: None,
            timeout_secs: DEFAULT_OPENAI_TIMEOUT_SECS,
        }
    }

    pub fn chat_completions_url(&self) -> String {
        let base = self.base_url.as_deref().unwrap_or(DEFAULT_OPENAI_BASE_URL);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub root: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_STORE_ROOT),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_OPENAI_TIMEOUT_SECS
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl SocialConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::default())
    }

    /// Load configuration from an explicit variable map instead of the process environment
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self> {
        let source: config::Map<String, String> = vars.into_iter().collect();
        Self::from_environment(Environment::default().source(Some(source)))
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let raw: RawConfig = Config::builder()
            .add_source(environment)
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| SocialError::Config(format!("Failed to read environment: {}", e)))?;

        Self::from_raw_config(raw)
    }

    /// Convert raw values to structured config, applying defaults
    fn from_raw_config(raw: RawConfig) -> Result<Self> {
        // OpenAI settings only matter once a credential is present
        let openai = match non_empty(raw.openai_api_key) {
            Some(api_key) => {
                let timeout_secs = match non_empty(raw.openai_timeout_secs) {
                    Some(value) => value.parse::<u64>().map_err(|e| {
                        SocialError::Config(format!("OPENAI_TIMEOUT_SECS must be a positive integer: {}", e))
                    })?,
                    None => DEFAULT_OPENAI_TIMEOUT_SECS,
                };

                Some(OpenAIConfig {
                    api_key,
                    model: non_empty(raw.openai_model).unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                    base_url: non_empty(raw.openai_base_url),
                    timeout_secs,
                })
            }
            None => None,
        };

        let store = non_empty(raw.social_media_db)
            .map(|root| StoreConfig { root: PathBuf::from(root) })
            .unwrap_or_default();

        let config = Self { openai, store };
        config.validate()?;
        Ok(config)
    }

    /// Replace the store location (command-line override)
    pub fn with_store_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.store.root = root.into();
        self
    }

    /// Whether an external generation credential is configured
    pub fn external_generation_available(&self) -> bool {
        self.openai.is_some()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(openai) = &self.openai {
            if openai.timeout_secs == 0 {
                return Err(SocialError::Config(
                    "OPENAI_TIMEOUT_SECS must be greater than zero".to_string(),
                ));
            }
        }

        if self.store.root.as_os_str().is_empty() {
            return Err(SocialError::Config("Store location is required".to_string()));
        }

        Ok(())
    }
}
