use clap::Parser;
use imgduck::cli::Args;
use imgduck::processing::CompressionOptions;
use imgduck::{logger, print_summary, run_batch};
use std::process;

fn main() {
    let args = Args::parse();

    logger::set_quiet_mode(args.quiet);
    logger::set_verbose_mode(args.verbose);

    if !args.target_dir.is_dir() {
        imgduck::error!(
            "Target directory does not exist or is not a directory: {}",
            args.target_dir.display()
        );
        process::exit(1);
    }

    let options = match CompressionOptions::new(args.quality, args.threshold) {
        Ok(options) => options,
        Err(e) => {
            imgduck::error!("{}", e);
            process::exit(1);
        }
    };

    let summary = run_batch(&args.target_dir, &options);
    print_summary(&summary);
}
