use crate::models::JokeCatalog;
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct JokesConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    #[serde(default)]
    pub stream: StreamSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StreamSettings {
    /// Pause between consecutive frames, in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Ordered message list; constant for the life of the process.
    #[serde(default = "JokeCatalog::default_jokes")]
    pub messages: Vec<String>,
}

fn default_interval_ms() -> u64 {
    2000
}

impl Default for StreamSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            messages: JokeCatalog::default_jokes(),
        }
    }
}

impl JokesConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let interval_ms = env::var("STREAM_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_interval_ms);

        Ok(JokesConfig {
            common,
            stream: StreamSettings {
                interval_ms,
                messages: JokeCatalog::default_jokes(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_the_fixed_stream() {
        let settings = StreamSettings::default();
        assert_eq!(settings.interval_ms, 2000);
        assert_eq!(settings.messages.len(), 2);
        assert_eq!(
            settings.messages[0],
            "Why did the epoch halve? To reduce supply!"
        );
    }
}
