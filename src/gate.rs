//! Per-subdirectory control flow: probe the first image, compare the saving
//! against the threshold, then either recompress the whole directory or
//! leave it untouched.

use crate::batch::Summary;
use crate::error::ProcessError;
use crate::processing::{compress_to_temp, CompressionOptions};
use crate::replace::install_compressed;
use crate::scan::list_images;
use crate::utils::{format_file_size, saving_percent};
use std::fs;
use std::path::{Path, PathBuf};

/// Terminal classification of one subdirectory pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    NoImages,
    GateError,
    GateRejected,
    GatePassed,
}

/// Decide and execute one subdirectory.
///
/// The first image in case-insensitive name order is the gate: it is
/// compressed to a staged rendition and its saving percentage decides the
/// whole directory. Below `options.threshold` nothing is modified. At or
/// above it, the gate rendition is installed and every remaining image is
/// compressed in turn, with per-file failures isolated.
///
/// Counter updates land in `summary`; errors are reported and absorbed, never
/// propagated.
pub fn process_subdir(
    dir: &Path,
    options: &CompressionOptions,
    summary: &mut Summary,
) -> GateOutcome {
    let images = match list_images(dir) {
        Ok(images) => images,
        Err(e) => {
            summary.skipped_error_subdirs += 1;
            crate::error!("Cannot list {}: {}", dir.display(), e);
            return GateOutcome::GateError;
        }
    };

    if images.is_empty() {
        summary.skipped_no_images_subdirs += 1;
        crate::info!("📋 No images in {}", dir.display());
        return GateOutcome::NoImages;
    }

    let gate_image = &images[0];
    let gate_name = file_name(gate_image);
    crate::info!("\n📂 {}", dir.display());
    crate::info!("  🚪 Gate image: {}", gate_name);

    let probe = compress_to_temp(gate_image, options.quality).and_then(|tmp| {
        let original_size = fs::metadata(gate_image)?.len();
        let compressed_size = tmp.as_file().metadata()?.len();
        Ok((tmp, original_size, compressed_size))
    });

    let (tmp, original_size, compressed_size) = match probe {
        Ok(result) => result,
        Err(e) => {
            summary.skipped_error_subdirs += 1;
            summary.failed_files += 1;
            crate::error!("Cannot compress gate image {}: {}", gate_name, e);
            return GateOutcome::GateError;
        }
    };

    let saved = saving_percent(original_size, compressed_size);
    crate::info!(
        "  📊 Gate result: {} -> {} (saved {:.2}%)",
        format_file_size(original_size),
        format_file_size(compressed_size),
        saved
    );
    crate::verbose!(
        "gate sizes: original={} bytes, compressed={} bytes",
        original_size,
        compressed_size
    );

    if saved < options.threshold {
        summary.skipped_threshold_subdirs += 1;
        crate::info!(
            "  ⏭️  Below threshold: {:.2}% < {:.2}%, directory skipped",
            saved,
            options.threshold
        );
        drop(tmp);
        return GateOutcome::GateRejected;
    }

    summary.passed_subdirs += 1;

    match install_compressed(tmp, gate_image) {
        Ok(target) => {
            summary.compressed_files += 1;
            crate::info!("  ✅ Replaced gate image: {}", gate_name);
            crate::verbose!("installed {}", target.display());
        }
        Err(e) => {
            summary.failed_files += 1;
            crate::error!("Replace gate image {} failed: {}", gate_name, e);
            return GateOutcome::GatePassed;
        }
    }

    for image in &images[1..] {
        match compress_and_install(image, options.quality) {
            Ok(target) => {
                summary.compressed_files += 1;
                crate::info!("  ✅ {}", file_name(image));
                crate::verbose!("installed {}", target.display());
            }
            Err(e) => {
                summary.failed_files += 1;
                crate::error!("{}: {}", file_name(image), e);
            }
        }
    }

    GateOutcome::GatePassed
}

fn compress_and_install(source: &Path, quality: u8) -> Result<PathBuf, ProcessError> {
    let tmp = compress_to_temp(source, quality)?;
    let target = install_compressed(tmp, source)?;
    Ok(target)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
