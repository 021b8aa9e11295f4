use std::path::Path;

use config::Config;
use error_stack::{Result, ResultExt};
use thiserror::Error;

use crate::application::transaction_presenter::TransactionPresenter;
use crate::domain::blockchain::rpc_server::RpcServer;
use crate::formatting::amount_formatter::{AmountFormatter, ETHER_DECIMALS};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config sources")]
    ReadError,
    #[error("Config does not match the expected shape")]
    DeserializeError,
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct NetworkConfig {
    #[serde(default)]
    pub server: RpcServer,
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub default_decimals: u32,
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub decimal_separator: Box<str>,
    pub grouping_separator: Box<str>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let short = AmountFormatter::short();
        Self {
            default_decimals: ETHER_DECIMALS,
            minimum_fraction_digits: short.minimum_fraction_digits,
            maximum_fraction_digits: short.maximum_fraction_digits,
            decimal_separator: short.decimal_separator,
            grouping_separator: short.grouping_separator,
        }
    }
}

impl DisplayConfig {
    pub fn formatter(&self) -> AmountFormatter {
        AmountFormatter {
            minimum_fraction_digits: self.minimum_fraction_digits,
            maximum_fraction_digits: self.maximum_fraction_digits,
            decimal_separator: self.decimal_separator.clone(),
            grouping_separator: self.grouping_separator.clone(),
        }
    }

    pub fn presenter(&self) -> TransactionPresenter {
        TransactionPresenter::new(self.formatter(), self.default_decimals)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    pub level: Box<str>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl AppConfig {
    /// Loads `path` (extension optional, any format the `config` crate knows) layered under
    /// `TX_CELLS__*` environment variables. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::builder(path)
            .add_source(config::Environment::with_prefix("TX_CELLS").separator("__"))
            .build()
            .change_context(ConfigError::ReadError)
            .attach_printable_lazy(|| format!("Config path: {}", path.display()))?
            .try_deserialize()
            .change_context(ConfigError::DeserializeError)
            .attach_printable_lazy(|| format!("Config path: {}", path.display()))
    }

    fn builder(path: &Path) -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(config::File::from(path).required(false))
    }
}
