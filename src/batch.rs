//! Run orchestration: enumerate subdirectories, drive the gate over each one
//! in order, and accumulate the run counters.

use crate::gate::process_subdir;
use crate::processing::CompressionOptions;
use crate::scan::collect_subdirs;
use crate::utils::create_progress_spinner;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Instant;

/// Counters for one run. Every scanned subdirectory ends in exactly one of
/// the four outcome buckets.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub scanned_subdirs: usize,
    pub passed_subdirs: usize,
    pub skipped_threshold_subdirs: usize,
    pub skipped_error_subdirs: usize,
    pub skipped_no_images_subdirs: usize,
    pub compressed_files: usize,
    pub failed_files: usize,
}

impl Summary {
    pub fn outcomes_balance(&self) -> bool {
        self.passed_subdirs
            + self.skipped_threshold_subdirs
            + self.skipped_error_subdirs
            + self.skipped_no_images_subdirs
            == self.scanned_subdirs
    }
}

/// Process every subdirectory below `root` with the same fixed options.
///
/// Subdirectories are handled strictly in sorted order, each finished before
/// the next starts, and decided independently of each other. Individual
/// failures are absorbed into the counters; this function itself cannot fail
/// once `root` is a valid directory.
pub fn run_batch(root: &Path, options: &CompressionOptions) -> Summary {
    let start_time = Instant::now();

    let spinner = create_progress_spinner("Scanning subdirectories...");
    let subdirs = collect_subdirs(root);
    spinner.finish_and_clear();

    let mut summary = Summary {
        scanned_subdirs: subdirs.len(),
        ..Default::default()
    };

    if subdirs.is_empty() {
        crate::info!("⚠️  No subdirectories found under {}", root.display());
        return summary;
    }

    crate::info!("🚀 Starting gated batch compression...");
    crate::info!("🎯 Target directory: {}", root.display());
    crate::info!("⚙️  Quality         : {}", options.quality);
    crate::info!("📉 Threshold       : {:.2}%", options.threshold);
    crate::info!("📁 Subdirectories  : {}", subdirs.len());

    let progress = ProgressBar::new(subdirs.len() as u64);
    progress.set_style(ProgressStyle::default_bar());

    for dir in &subdirs {
        process_subdir(dir, options, &mut summary);
        progress.inc(1);
    }

    progress.finish_and_clear();

    let elapsed_time = start_time.elapsed();
    crate::info!("\n⏱️  Total time: {:?}", elapsed_time);

    debug_assert!(summary.outcomes_balance());
    summary
}

/// Print the end-of-run counters.
pub fn print_summary(summary: &Summary) {
    crate::info!("\n📊 Summary:");
    crate::info!("  📁 Scanned subdirectories : {}", summary.scanned_subdirs);
    crate::info!("  ✅ Passed gate            : {}", summary.passed_subdirs);
    crate::info!(
        "  ⏭️  Skipped (threshold)    : {}",
        summary.skipped_threshold_subdirs
    );
    crate::info!(
        "  ❌ Skipped (error)        : {}",
        summary.skipped_error_subdirs
    );
    crate::info!(
        "  📋 Skipped (no images)    : {}",
        summary.skipped_no_images_subdirs
    );
    crate::info!("  🗜️  Compressed files       : {}", summary.compressed_files);
    crate::info!("  ⚠️  Failed files           : {}", summary.failed_files);
}
