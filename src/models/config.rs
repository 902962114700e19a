use super::OutputFormat;
use serde::Deserialize;
use std::path::Path;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "INFRARED_CONFIG";

/// Conversion defaults loaded from a YAML file.
///
/// Every key is optional; command-line flags override whatever is set here.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Channel weights as `[r, g, b]`
    #[serde(default)]
    pub weights: Option<[f32; 3]>,

    /// Linearize sRGB samples before mixing
    #[serde(default)]
    pub gamma: Option<bool>,

    /// Primary output container
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl AppConfig {
    /// Parse a YAML document. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from `path`, or return defaults when no path is given.
    ///
    /// An unreadable or malformed file is logged and replaced by defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        weights = ?config.weights,
                        gamma = ?config.gamma,
                        format = ?config.format,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        %e,
                        path = %path.display(),
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    %e,
                    path = %path.display(),
                    "Failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }
}
