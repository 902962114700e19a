use clap::ValueEnum;
use nir_raster::ContainerFormat;
use serde::Deserialize;
use std::fmt;

/// Primary output container selectable from the command line or config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Binary PGM (P5)
    #[default]
    Pgm,
    /// 8-bit grayscale BMP
    Bmp,
}

impl OutputFormat {
    /// The library container this format writes.
    pub fn container(self) -> ContainerFormat {
        match self {
            OutputFormat::Pgm => ContainerFormat::TextPgm,
            OutputFormat::Bmp => ContainerFormat::BitmapGray8,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pgm => f.write_str("pgm"),
            OutputFormat::Bmp => f.write_str("bmp"),
        }
    }
}
