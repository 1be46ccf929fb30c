//! TOML configuration file support for scheme generation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::hex_from_argb;
use crate::generate::{GenerateConfig, parse_seed};

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Invalid color format
    InvalidColor(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::InvalidColor(s) => write!(f, "Invalid color: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeConfig {
    /// Scheme metadata
    pub scheme: SchemeMetadata,
    /// Seed color settings
    pub seed: SeedConfig,
    /// Output settings
    pub output: OutputConfig,
}

/// Scheme metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeMetadata {
    /// Name of the scheme
    pub name: String,
}

/// Seed color settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Seed color (any CSS color format)
    pub color: Option<String>,
    /// Derive palette chroma from the seed instead of the vivid
    /// defaults
    pub content: bool,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit full tonal ramps alongside the role tokens
    pub ramps: bool,
}

impl SchemeConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Convert to a GenerateConfig.
    ///
    /// Uses defaults for any unspecified values.
    pub fn to_generate_config(&self) -> Result<GenerateConfig, ConfigError> {
        let defaults = GenerateConfig::default();

        let seed = if let Some(ref color) = self.seed.color {
            parse_seed(color).map_err(ConfigError::InvalidColor)?
        } else {
            defaults.seed
        };

        Ok(GenerateConfig {
            seed,
            content: self.seed.content,
            name: if self.scheme.name.is_empty() {
                defaults.name
            } else {
                self.scheme.name.clone()
            },
            include_ramps: self.output.ramps,
        })
    }

    /// Create from a GenerateConfig.
    pub fn from_generate_config(config: &GenerateConfig) -> Self {
        Self {
            scheme: SchemeMetadata {
                name: config.name.clone(),
            },
            seed: SeedConfig {
                color: Some(hex_from_argb(config.seed)),
                content: config.content,
            },
            output: OutputConfig {
                ramps: config.include_ramps,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_toml() {
        let config = GenerateConfig {
            seed: 0xff0000ff,
            content: true,
            name: "Blue".to_string(),
            include_ramps: true,
        };
        let file = SchemeConfig::from_generate_config(&config);
        let serialized = toml::to_string_pretty(&file).unwrap();
        let reloaded: SchemeConfig = toml::from_str(&serialized).unwrap();
        let rebuilt = reloaded.to_generate_config().unwrap();
        assert_eq!(rebuilt.seed, config.seed);
        assert_eq!(rebuilt.content, config.content);
        assert_eq!(rebuilt.name, config.name);
        assert_eq!(rebuilt.include_ramps, config.include_ramps);
    }

    #[test]
    fn empty_config_falls_back_to_defaults() {
        let parsed: SchemeConfig = toml::from_str("").unwrap();
        let config = parsed.to_generate_config().unwrap();
        let defaults = GenerateConfig::default();
        assert_eq!(config.seed, defaults.seed);
        assert_eq!(config.name, defaults.name);
    }

    #[test]
    fn invalid_seed_color_is_rejected() {
        let parsed: SchemeConfig = toml::from_str("[seed]\ncolor = \"nope\"").unwrap();
        assert!(matches!(
            parsed.to_generate_config(),
            Err(ConfigError::InvalidColor(_))
        ));
    }
}
