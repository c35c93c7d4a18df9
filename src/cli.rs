use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "imgduck",
    about = "Gated batch JPEG recompression for photo directory trees",
    long_about = "imgduck walks a directory tree and recompresses the images of each \
                  subdirectory to JPEG, but only where it pays off. The first image of a \
                  subdirectory acts as a gate: it is compressed to a temporary file, and \
                  only if the size saving reaches the threshold is the whole subdirectory \
                  converted in place. Below the threshold the subdirectory is left \
                  untouched.",
    version = "0.1.0",
    after_help = "EXAMPLES:\n  \
    imgduck ./photos\n  \
    imgduck ./photos -q 70 -t 30\n  \
    imgduck ./photos --threshold 0\n  \
    imgduck --quiet ./photos"
)]
pub struct Args {
    #[arg(help = "Root directory whose subdirectories are processed")]
    pub target_dir: PathBuf,

    #[arg(
        short = 'q',
        long,
        help = "JPEG quality (1-100, default: 80)",
        long_help = "JPEG quality from 1 (lowest) to 100 (highest), applied to every \
                     image in every subdirectory that passes the gate."
    )]
    pub quality: Option<u8>,

    #[arg(
        short = 't',
        long,
        help = "Minimum saving percent required by the gate (default: 50)",
        long_help = "Saving percent the first image of a subdirectory must reach for the \
                     subdirectory to be processed. Savings are measured against the \
                     original file size, so 50 means the compressed copy must be at most \
                     half as large. Must be >= 0."
    )]
    pub threshold: Option<f64>,

    #[arg(long, help = "Suppress all output except errors")]
    pub quiet: bool,

    #[arg(short = 'v', long, help = "Enable verbose output")]
    pub verbose: bool,
}
