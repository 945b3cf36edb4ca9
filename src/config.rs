use log::LevelFilter;
use serde::Deserialize;

use crate::error::EngineError;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    #[serde(default)]
    pub seed: Option<u64>,
    /// Settle equal totals as a push rather than a dealer win.
    #[serde(default)]
    pub ties_push: bool,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            seed: None,
            ties_push: false,
            log_level: default_log_level(),
        }
    }
}

impl EngineConfig {
    pub fn seeded(seed: u64) -> Self {
        EngineConfig {
            seed: Some(seed),
            ..EngineConfig::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(text)
            .map_err(|err| EngineError::Config(err.to_string()))?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, EngineError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| EngineError::Config(format!("unknown log level '{}'", self.log_level)))
    }
}
