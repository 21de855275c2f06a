use crate::errors::ConfigError;
use exchange::binance::{
    consts::{DEFAULT_TIMEOUT_MILLI_SECS, TEST_FUTURE_BASE_URL},
    futures::trade_api::FuturesApiConfig,
};
use serde::Deserialize;
use std::collections::HashMap;

pub const ENV_PREFIX: &str = "BINANCE";

fn default_base_url() -> String {
    TEST_FUTURE_BASE_URL.to_string()
}

fn default_timeout_milli_secs() -> u64 {
    DEFAULT_TIMEOUT_MILLI_SECS
}

fn default_log_file() -> String {
    "logs/trading_bot.log".to_string()
}

#[derive(Clone, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_milli_secs")]
    pub timeout_milli_secs: u64,
    pub recv_window: Option<u64>, // 不设置则不发送 recvWindow

    #[serde(default = "default_log_file")]
    pub log_file: String,
}

impl BotConfig {
    /// Loads `filepath` when it exists, then overlays `BINANCE_*` environment
    /// variables.
    pub fn load(filepath: &str) -> Result<Self, ConfigError> {
        Self::load_with_env(filepath, None)
    }

    /// Same as [`BotConfig::load`], reading variables from `env` instead of the
    /// process environment when given.
    pub fn load_with_env(
        filepath: &str,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(
                config::File::with_name(filepath)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).source(env))
            .build()
            .map_err(|e| ConfigError::FileError {
                message: e.to_string(),
            })?;

        let config: BotConfig = settings
            .try_deserialize()
            .map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;
        Ok(config)
    }

    pub fn has_credentials(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.api_secret.trim().is_empty()
    }

    pub fn api_config(&self) -> Result<FuturesApiConfig, ConfigError> {
        if !self.has_credentials() {
            return Err(ConfigError::MissingCredentials);
        }
        Ok(FuturesApiConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.trim().to_string(),
            api_secret: self.api_secret.trim().to_string(),
            timeout_milli_secs: self.timeout_milli_secs,
            recv_window: self.recv_window,
        })
    }
}

// 不打印密钥
impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("api_key", &mask(&self.api_key))
            .field("api_secret", &mask(&self.api_secret))
            .field("base_url", &self.base_url)
            .field("timeout_milli_secs", &self.timeout_milli_secs)
            .field("recv_window", &self.recv_window)
            .field("log_file", &self.log_file)
            .finish()
    }
}

fn mask(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "***" }
}
