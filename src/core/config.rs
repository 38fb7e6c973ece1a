//! Configuration management.
//!
//! Handles loading and saving configuration from TOML files.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::access::AccessPolicy;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Access-control settings
    pub access: AccessConfig,

    /// Simulated-latency settings
    pub simulation: SimulationConfig,

    /// Webhook integration settings
    pub webhooks: WebhooksConfig,
}

/// Access-control settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// What a denied navigation request does: `filter-menu` keeps the prior
    /// page (and the menu never offers disallowed pages), `deny-page` routes
    /// to an explicit access-denied view.
    pub policy: AccessPolicy,
}

/// Simulated-latency settings for the mocked AI steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Delay before a document analysis settles, in milliseconds.
    pub analysis_delay_ms: u64,

    /// Delay before a draft generation settles, in milliseconds.
    pub drafting_delay_ms: u64,
}

impl SimulationConfig {
    /// Analysis delay as a [`Duration`].
    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    /// Drafting delay as a [`Duration`].
    pub fn drafting_delay(&self) -> Duration {
        Duration::from_millis(self.drafting_delay_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { analysis_delay_ms: 3000, drafting_delay_ms: 2500 }
    }
}

/// Webhook integration settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhooksConfig {
    /// Optional secret used to sign the connection ping payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_secret: Option<String>,
}

impl Config {
    /// Load configuration.
    ///
    /// Looks for config in:
    /// 1. `.lexiscomply.toml` in the current directory
    /// 2. `~/.config/lexiscomply/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(".lexiscomply.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("lexiscomply").join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the global config file.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        let app_dir = config_dir.join("lexiscomply");
        std::fs::create_dir_all(&app_dir)?;

        let config_path = app_dir.join("config.toml");
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("lexiscomply"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.access.policy, AccessPolicy::FilterMenu);
        assert_eq!(config.simulation.analysis_delay_ms, 3000);
        assert_eq!(config.simulation.drafting_delay_ms, 2500);
        assert!(config.webhooks.signing_secret.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("[access]"));
        assert!(toml_str.contains("[simulation]"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [access]
            policy = "deny-page"
            "#,
        )
        .unwrap();

        assert_eq!(config.access.policy, AccessPolicy::DenyPage);
        assert_eq!(config.simulation.analysis_delay_ms, 3000);
    }

    #[test]
    fn test_delay_accessors() {
        let simulation = SimulationConfig::default();
        assert_eq!(simulation.analysis_delay(), Duration::from_millis(3000));
        assert_eq!(simulation.drafting_delay(), Duration::from_millis(2500));
    }
}
