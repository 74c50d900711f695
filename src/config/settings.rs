//! Settings structures for CineSuggest configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub suggest: SuggestSettings,
    pub outgoing: OutgoingSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            provider: ProviderSettings::default(),
            suggest: SuggestSettings::default(),
            outgoing: OutgoingSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (CINESUGGEST_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("CINESUGGEST_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("CINESUGGEST_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("CINESUGGEST_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("CINESUGGEST_PROVIDER_URL") {
            self.provider.base_url = val;
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed to consumers
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "CineSuggest".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 4000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Backend suggestion provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of the suggestion provider
    pub base_url: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "http://api:8000".to_string(),
        }
    }
}

/// Suggestion pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestSettings {
    /// Minimum term length before a query is issued
    pub min_term_length: usize,
    /// Debounce quiet period in milliseconds
    pub debounce_ms: u64,
    /// Maximum suggestions handed to presentation
    pub max_results: usize,
}

impl Default for SuggestSettings {
    fn default() -> Self {
        Self {
            min_term_length: crate::MIN_TERM_LEN,
            debounce_ms: crate::DEBOUNCE_QUIET_MS,
            max_results: crate::MAX_SUGGESTIONS,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Pool max size
    pub pool_maxsize: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 4000);
        assert!(!settings.general.debug);
        assert_eq!(settings.provider.base_url, "http://api:8000");
        assert_eq!(settings.suggest.min_term_length, 4);
        assert_eq!(settings.suggest.debounce_ms, 300);
        assert_eq!(settings.suggest.max_results, 20);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = "server:\n  port: 8080\nprovider:\n  base_url: http://localhost:9000\n";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind_address, "0.0.0.0");
        assert_eq!(settings.provider.base_url, "http://localhost:9000");
        assert_eq!(settings.suggest.min_term_length, 4);
        assert_eq!(settings.outgoing.request_timeout, 5.0);
    }
}
