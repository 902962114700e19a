pub mod config;
pub mod options;
pub mod output_format;

pub use config::{AppConfig, CONFIG_ENV};
pub use options::{ConvertOptions, OptionOverrides};
pub use output_format::OutputFormat;
