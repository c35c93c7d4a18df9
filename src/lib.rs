pub mod batch;
pub mod cli;
pub mod constants;
pub mod error;
pub mod gate;
pub mod logger;
pub mod processing;
pub mod replace;
pub mod scan;
pub mod utils;

pub use batch::{print_summary, run_batch, Summary};
pub use error::{CompressionError, ProcessError, ReplacementError, Result};
pub use gate::{process_subdir, GateOutcome};
pub use processing::{compress_to_temp, CompressionOptions};
pub use replace::{install_compressed, target_jpeg_path};
pub use scan::{collect_subdirs, list_images};
pub use utils::{format_file_size, is_image_file, is_jpeg_file, saving_percent};
