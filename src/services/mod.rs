pub mod converter;

pub use converter::{convert, ConversionReport, SecondaryWrite};
