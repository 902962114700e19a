use crate::error::ConvertError;
use crate::models::ConvertOptions;
use nir_raster::{read_ppm_file, save, transform, ContainerFormat, EncodeError, PpmHeader};
use std::path::PathBuf;

/// Outcome of the optional 24-bit BMP copy of the input.
#[derive(Debug)]
pub struct SecondaryWrite {
    /// Requested RGB BMP path
    pub path: PathBuf,
    /// Outcome of the write
    pub result: Result<(), EncodeError>,
}

impl SecondaryWrite {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }

    /// Message for stderr when the write failed.
    pub fn failure_message(&self) -> Option<String> {
        self.result
            .as_ref()
            .err()
            .map(|e| format!("Failed to write RGB BMP: {}: {}", self.path.display(), e))
    }
}

/// Summary of a successful conversion.
#[derive(Debug)]
pub struct ConversionReport {
    /// Header of the decoded input
    pub header: PpmHeader,
    /// Container the primary output was written as
    pub format: ContainerFormat,
    /// Primary output path
    pub output: PathBuf,
    /// Present when an RGB BMP copy was requested
    pub secondary: Option<SecondaryWrite>,
}

/// Decode the input PPM, mix it into a pseudo-NIR channel and write the
/// primary output.
///
/// When `options.rgb_bmp` is set and the primary write succeeded, the
/// decoded RGB input is also written as a 24-bit BMP. A failure there is
/// recorded in the report and logged; it never turns the result into an
/// error. Files left behind by a failed write are not removed.
pub fn convert(options: &ConvertOptions) -> Result<ConversionReport, ConvertError> {
    let (header, rgb) = read_ppm_file(&options.input).map_err(|source| ConvertError::Decode {
        path: options.input.clone(),
        source,
    })?;

    tracing::info!(
        input = %options.input.display(),
        width = header.width,
        height = header.height,
        maxval = header.maxval,
        "Decoded PPM"
    );
    if header.maxval < nir_raster::codec::pnm::MAX_SAMPLE_VALUE {
        tracing::debug!(maxval = header.maxval, "Samples are used as stored, not rescaled");
    }

    tracing::debug!(
        weights = %options.weights.normalized(),
        gamma = options.gamma,
        "Resolved channel mix"
    );

    let nir = transform(&rgb, options.weights, options.gamma).map_err(|source| {
        ConvertError::Transform {
            path: options.input.clone(),
            source,
        }
    })?;

    let format = options.format.container();
    save(&options.output, format, &nir).map_err(|source| ConvertError::Encode {
        path: options.output.clone(),
        format,
        source,
    })?;
    tracing::info!(output = %options.output.display(), %format, "Wrote output");

    let secondary = options.rgb_bmp.as_ref().map(|path| {
        let result = save(path, ContainerFormat::BitmapRgb24, &rgb);
        match &result {
            Ok(()) => tracing::info!(output = %path.display(), "Wrote RGB BMP"),
            Err(e) => tracing::warn!(%e, output = %path.display(), "Failed to write RGB BMP"),
        }
        SecondaryWrite {
            path: path.clone(),
            result,
        }
    });

    Ok(ConversionReport {
        header,
        format,
        output: options.output.clone(),
        secondary,
    })
}
