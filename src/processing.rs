use crate::constants::{
    DEFAULT_QUALITY, DEFAULT_THRESHOLD, MAX_QUALITY, MIN_QUALITY, TEMP_PREFIX, TEMP_SUFFIX,
};
use crate::error::{CompressionError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageDecoder, ImageReader};
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Run-wide parameters shared by every subdirectory.
#[derive(Debug, Clone)]
pub struct CompressionOptions {
    pub quality: u8,
    pub threshold: f64,
}

impl CompressionOptions {
    pub fn new(quality: Option<u8>, threshold: Option<f64>) -> Result<Self> {
        let quality = quality.unwrap_or(DEFAULT_QUALITY);
        if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(CompressionError::InvalidQuality(quality));
        }

        let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CompressionError::InvalidThreshold(threshold));
        }

        Ok(Self { quality, threshold })
    }
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            quality: DEFAULT_QUALITY,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Re-encode a source image as JPEG at `quality` into a fresh temporary file
/// beside the source.
///
/// The source is decoded, rotated per its embedded orientation metadata (so
/// the output needs no rotation tag), flattened to RGB, and encoded. The
/// source file itself is never touched.
///
/// # Arguments
/// * `source` - Path of the image to compress
/// * `quality` - JPEG quality, 1-100
///
/// # Returns
/// * `Ok(NamedTempFile)` - Handle owning the rendition. Dropping the handle
///   deletes the file, so the caller must persist it to keep it.
/// * `Err(CompressionError)` - If the source cannot be decoded or the encode
///   fails. Any partially written temp file is removed before returning.
pub fn compress_to_temp(source: &Path, quality: u8) -> Result<NamedTempFile> {
    let mut decoder = ImageReader::open(source)?.into_decoder()?;
    let orientation = decoder.orientation()?;
    let mut img = DynamicImage::from_decoder(decoder)?;
    img.apply_orientation(orientation);

    let rgb = img.into_rgb8();

    // Staged next to the source so the later install is one rename on the
    // same filesystem.
    let parent = match source.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(parent)?;

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
        rgb.write_with_encoder(encoder)?;
        writer.flush()?;
    }

    Ok(tmp)
}
