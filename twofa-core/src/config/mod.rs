use crate::error::ContractError;
use config::{Config as Cfg, Environment, File, FileFormat};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_service_name")]
    pub service_name: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// OTLP collector endpoint. Spans are only exported when this is set.
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

fn default_service_name() -> String {
    "twofa-reset".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            otlp_endpoint: None,
        }
    }
}

impl Config {
    /// Loads `.env`, then an optional `configuration` file, then `TWOFA__*` style variables.
    pub fn load() -> Result<Self, ContractError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("TWOFA").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ContractError> {
        let config = Cfg::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
