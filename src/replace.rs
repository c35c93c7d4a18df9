use crate::constants::JPEG_TARGET_EXTENSION;
use crate::error::ReplacementError;
use crate::utils::is_jpeg_file;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Final on-disk path for a source file's JPEG rendition: the source path
/// itself when it already carries a JPEG extension, otherwise the source
/// path with its extension swapped to `jpg`.
pub fn target_jpeg_path(source: &Path) -> PathBuf {
    if is_jpeg_file(source) {
        source.to_path_buf()
    } else {
        source.with_extension(JPEG_TARGET_EXTENSION)
    }
}

/// Install a compressed rendition over its source in one rename, removing the
/// original file when the target path differs.
///
/// The rename overwrites whatever sits at the target, so no reader ever sees
/// a half-written file there. The temp handle is consumed either way: on
/// success it becomes the target, on failure it is deleted.
pub fn install_compressed(
    tmp: NamedTempFile,
    source: &Path,
) -> std::result::Result<PathBuf, ReplacementError> {
    let target = target_jpeg_path(source);

    tmp.persist(&target).map_err(|e| ReplacementError::Install {
        target: target.clone(),
        source: e.error,
    })?;

    if target.as_path() != source && source.exists() {
        fs::remove_file(source).map_err(|e| ReplacementError::RemoveOriginal {
            path: source.to_path_buf(),
            source: e,
        })?;
    }

    Ok(target)
}
