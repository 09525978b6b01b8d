use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use crate::application::use_cases::data_enhancer::ensure_supported_input;
use crate::interfaces::cli::{self, Cli};

pub fn run() -> ExitCode {
    // clap prints usage and exits nonzero on missing arguments
    let args = Cli::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = ensure_supported_input(&args.input) {
        error!(error = %err, "Rejected input file");
        eprintln!("Error: {}", err);
        eprintln!("{}", Cli::usage());
        return ExitCode::FAILURE;
    }

    match cli::execute(&args) {
        Ok(summary) => {
            println!("Data enhancement complete");
            println!("Output file: {}", summary.output.display());
            println!("Enhancement report: {}", summary.report.display());
            println!(
                "Enhanced {} field(s)",
                summary.log.improvement_summary.fields_enhanced
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, input = %args.input.display(), "Enhancement failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
