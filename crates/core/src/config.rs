use crate::error::{AdsError, AdsResult};
use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ADS_ASSISTANT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where and how the domain store persists itself.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Fixed key of the single persistence slot.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Directory backing the file slot used by the console binary.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_campaign_id_prefix")]
    pub campaign_id_prefix: String,
    #[serde(default = "default_product_id_prefix")]
    pub product_id_prefix: String,
}

/// Durations of the simulated generation runs.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_targeting_delay_ms")]
    pub targeting_delay_ms: u64,
    #[serde(default = "default_sentiment_delay_ms")]
    pub sentiment_delay_ms: u64,
    #[serde(default = "default_sentiment_phase_ms")]
    pub sentiment_phase_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

// Default functions
fn default_storage_key() -> String {
    "ads-assistant-store".to_string()
}
fn default_data_dir() -> String {
    ".ads-assistant".to_string()
}
fn default_campaign_id_prefix() -> String {
    "user-".to_string()
}
fn default_product_id_prefix() -> String {
    "p-".to_string()
}
fn default_targeting_delay_ms() -> u64 {
    800
}
fn default_sentiment_delay_ms() -> u64 {
    1700
}
fn default_sentiment_phase_ms() -> u64 {
    500
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            data_dir: default_data_dir(),
            campaign_id_prefix: default_campaign_id_prefix(),
            product_id_prefix: default_product_id_prefix(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            targeting_delay_ms: default_targeting_delay_ms(),
            sentiment_delay_ms: default_sentiment_delay_ms(),
            sentiment_phase_ms: default_sentiment_phase_ms(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            generation: GenerationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> AdsResult<Self> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADS_ASSISTANT")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| AdsError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_values() {
        let config = AppConfig::default();
        assert_eq!(config.store.storage_key, "ads-assistant-store");
        assert_eq!(config.store.campaign_id_prefix, "user-");
        assert_eq!(config.generation.targeting_delay_ms, 800);
        assert_eq!(config.generation.sentiment_delay_ms, 1700);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"generation": {"targeting_delay_ms": 10}}"#).unwrap();
        assert_eq!(config.generation.targeting_delay_ms, 10);
        assert_eq!(config.generation.sentiment_phase_ms, 500);
        assert_eq!(config.store.data_dir, ".ads-assistant");
    }
}
