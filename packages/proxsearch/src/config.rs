use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use proxsearch_common::{Error, Result, DEFAULT_FIELD};

fn get_default_field() -> String {
    DEFAULT_FIELD.to_owned()
}

fn get_default_distance() -> i32 {
    1
}

fn get_default_log_level() -> String {
    "info".to_owned()
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ProxConfig {
    /// Field of terms that don't specify one
    #[serde(default = "get_default_field")]
    pub default_field: String,

    /// Distance of windows that don't specify one
    #[serde(default = "get_default_distance")]
    pub default_distance: i32,

    #[serde(default)]
    pub pretty_print: bool,

    #[serde(default = "get_default_log_level")]
    pub log_level: String,
}

impl Default for ProxConfig {
    fn default() -> Self {
        ProxConfig {
            default_field: get_default_field(),
            default_distance: get_default_distance(),
            pretty_print: false,
            log_level: get_default_log_level(),
        }
    }
}

impl ProxConfig {
    pub fn from_json(raw_config: &str) -> Result<Self> {
        let config: ProxConfig = serde_json::from_str(raw_config)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration file, if there is one.
    pub fn from_file(config_file_path: &Path) -> Result<Self> {
        if config_file_path.is_file() {
            ProxConfig::from_json(&fs::read_to_string(config_file_path)?)
        } else {
            Ok(ProxConfig::default())
        }
    }

    pub fn get_log_level(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| Error::Config(format!("unknown log level '{}'", self.log_level)))
    }

    fn validate(&self) -> Result<()> {
        if self.default_field.is_empty() {
            return Err(Error::Config("default_field must not be empty".to_owned()));
        }

        self.get_log_level()?;

        Ok(())
    }
}
