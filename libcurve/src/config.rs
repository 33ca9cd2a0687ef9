use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use derive_more::{Display, FromStr};
use eyre::{Result, anyhow};
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG: &str = include_str!("../default_config.toml");

/// Handling of domain queries whose lower bound exceeds the upper bound.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, FromStr, PartialEq, Eq, Serialize,
)]
pub enum InvertedInterval {
    /// The query reports no data, and a warning is logged
    #[default]
    Reject,

    /// The bounds are exchanged before querying
    Swap,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct CurveConfig {
    #[serde(default)]
    pub inverted_interval: InvertedInterval,
}

impl CurveConfig {
    /// Loads the configuration in layers: the built-in defaults, then
    /// `user_config` if given and present, then `CURVE_*` environment variables.
    pub fn new(user_config: Option<&Path>) -> Result<Self> {
        let mut config =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(path) = user_config {
            config = config.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        config
            .add_source(Environment::with_prefix("curve"))
            .build()?
            .try_deserialize()
            .map_err(|e| anyhow!("Failed to parse config {e}"))
    }

    pub fn new_from_toml(config: &str) -> Result<Self> {
        Ok(toml::from_str(config)?)
    }
}
