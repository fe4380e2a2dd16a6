use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// Project-level configuration loaded from `.vectorguard.toml`.
/// Config gates which commands get registered at startup; it never reaches
/// the renderer, so brief output stays a pure function of template + catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub detectors: HashMap<String, DetectorConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub enabled: Option<bool>,
}

impl Config {
    /// Load config from a TOML file path. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Check if a detector command is enabled according to config.
    pub fn is_command_enabled(&self, name: &str) -> bool {
        self.detectors
            .get(name)
            .and_then(|d| d.enabled)
            .unwrap_or(true)
    }

    /// Generate default config file content.
    pub fn default_toml() -> &'static str {
        r#"# vectorguard configuration
# See: https://github.com/vectorguard-labs/vectorguard

# Per-detector overrides. Every detector is enabled unless disabled here.
# [detectors.honeypot-mechanism-attacks]
# enabled = false

# [detectors.ai-assisted-attacks]
# enabled = false
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.is_command_enabled("any-command"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[detectors.honeypot-mechanism-attacks]
enabled = false
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(!config.is_command_enabled("honeypot-mechanism-attacks"));
        assert!(config.is_command_enabled("reentrancy"));
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(Config::default_toml()).unwrap();
        assert!(config.detectors.is_empty());
    }

    #[test]
    fn test_load_missing_file_yields_default() {
        let config = Config::load(Path::new("/nonexistent/.vectorguard.toml")).unwrap();
        assert!(config.detectors.is_empty());
    }
}
