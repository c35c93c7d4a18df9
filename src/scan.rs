//! Directory discovery: subdirectory enumeration and per-directory image
//! listing. Listings are recomputed on every call; nothing is cached.

use crate::error::Result;
use crate::utils::is_image_file;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect every directory strictly below `root`, sorted by the byte order of
/// the full path string so runs are deterministic across filesystems.
///
/// Entries the walker cannot read are skipped; the caller is responsible for
/// `root` itself existing and being a directory.
pub fn collect_subdirs(root: &Path) -> Vec<PathBuf> {
    let mut subdirs: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| entry.into_path())
        .collect();

    // Sort on the whole path string, not component-wise path order.
    subdirs.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    subdirs
}

/// List the direct-child image files of `dir`, sorted case-insensitively by
/// file name (original name breaks ties). Nested directories and non-image
/// entries are ignored; the listing never recurses.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(&path) {
            images.push(path);
        }
    }

    images.sort_by_cached_key(|path| {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        (name.to_lowercase(), name)
    });

    Ok(images)
}
