pub const DEFAULT_QUALITY: u8 = 80;
pub const MIN_QUALITY: u8 = 1;
pub const MAX_QUALITY: u8 = 100;

pub const DEFAULT_THRESHOLD: f64 = 50.0;

// Extensions are matched case-insensitively, without the leading dot.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp", "tif", "tiff"];
pub const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];
pub const JPEG_TARGET_EXTENSION: &str = "jpg";

// Compressed renditions are staged as hidden siblings of the source file so
// installing them is a same-filesystem rename.
pub const TEMP_PREFIX: &str = ".imgduck-";
pub const TEMP_SUFFIX: &str = ".tmp";

pub const PROGRESS_SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
