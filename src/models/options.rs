use super::{AppConfig, OutputFormat};
use nir_raster::WeightTriple;
use std::path::PathBuf;

/// Settings given explicitly on the command line.
///
/// `None` means "not given", so the config file or the default applies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionOverrides {
    pub weights: Option<WeightTriple>,
    pub gamma: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Fully resolved settings for one conversion run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertOptions {
    /// Input PPM path
    pub input: PathBuf,
    /// Primary output path
    pub output: PathBuf,
    /// Channel weights as given (normalized by the kernel)
    pub weights: WeightTriple,
    /// Linearize sRGB samples before mixing
    pub gamma: bool,
    /// Primary output container
    pub format: OutputFormat,
    /// Optional path for a 24-bit BMP copy of the decoded input
    pub rgb_bmp: Option<PathBuf>,
}

impl ConvertOptions {
    /// Options with every setting at its built-in default.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            weights: WeightTriple::DEFAULT,
            gamma: false,
            format: OutputFormat::default(),
            rgb_bmp: None,
        }
    }

    /// Resolve each setting: command line first, then config file, then default.
    pub fn resolve(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        overrides: &OptionOverrides,
        config: &AppConfig,
    ) -> Self {
        let defaults = Self::new(input, output);
        Self {
            weights: overrides
                .weights
                .or(config.weights.map(WeightTriple::from))
                .unwrap_or(defaults.weights),
            gamma: overrides.gamma.or(config.gamma).unwrap_or(defaults.gamma),
            format: overrides.format.or(config.format).unwrap_or(defaults.format),
            ..defaults
        }
    }

    /// Set the path for the 24-bit BMP copy of the input.
    pub fn with_rgb_bmp(mut self, path: Option<PathBuf>) -> Self {
        self.rgb_bmp = path;
        self
    }
}
