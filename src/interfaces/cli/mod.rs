use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use tracing::info;

use crate::application::use_cases::data_enhancer::DataEnhancer;
use crate::application::use_cases::report_generator::ReportGenerator;
use crate::domain::enterprise::EnhancementLog;
use crate::domain::error::Result;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::storage;

#[derive(Parser, Debug)]
#[command(name = "enterprise-data-enhancer")]
#[command(
    about = "Fill missing employee counts and net profits from industry benchmarks",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Input table (.csv)
    pub input: PathBuf,

    /// Where to write the enhanced table
    pub output: PathBuf,

    /// Benchmark/rule overrides (.toml or .json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Also write the enhancement log as JSON
    #[arg(long = "log-json")]
    pub log_json: Option<PathBuf>,

    /// Log per-row decisions
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// One-line usage string
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }
}

/// Paths and log produced by a successful run
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub report: PathBuf,
    pub log: EnhancementLog,
}

/// Enhance the input table, then write the report (and JSON log if asked)
pub fn execute(cli: &Cli) -> Result<RunSummary> {
    let config = ConfigService::load(cli.config.as_deref())?;
    let enhancer = DataEnhancer::new(config)?;

    info!(input = %cli.input.display(), "Starting enhancement");
    let log = enhancer.enhance_csv_file(&cli.input, &cli.output)?;

    let report = storage::report_path_for(&cli.output);
    ReportGenerator::write(&log, &report)?;

    if let Some(path) = &cli.log_json {
        storage::write_json(path, &log)?;
        info!(path = %path.display(), "Wrote JSON log");
    }

    Ok(RunSummary {
        output: cli.output.clone(),
        report,
        log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::AppError;
    use std::fs;

    fn cli(input: PathBuf, output: PathBuf) -> Cli {
        Cli {
            input,
            output,
            config: None,
            log_json: None,
            verbose: false,
        }
    }

    #[test]
    fn test_parse_positional_args() {
        let parsed = Cli::try_parse_from(["enterprise-data-enhancer", "in.csv", "out.csv"]).unwrap();
        assert_eq!(parsed.input, PathBuf::from("in.csv"));
        assert_eq!(parsed.output, PathBuf::from("out.csv"));
        assert!(!parsed.verbose);
    }

    #[test]
    fn test_missing_output_is_usage_error() {
        let err = Cli::try_parse_from(["enterprise-data-enhancer", "in.csv"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(Cli::usage().contains("<INPUT> <OUTPUT>"));
    }

    #[test]
    fn test_execute_writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("companies.csv");
        let output = dir.path().join("enhanced.csv");
        fs::write(
            &input,
            "industry_type,revenue,employee_count,net_profit\n软件开发,10000000,,\n",
        )
        .unwrap();

        let mut args = cli(input, output.clone());
        args.log_json = Some(dir.path().join("log.json"));
        let summary = execute(&args).unwrap();

        assert_eq!(summary.report, dir.path().join("enhanced_enhancement_report.md"));
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "industry_type,revenue,employee_count,net_profit\n软件开发,10000000,120,1800000\n"
        );
        assert!(fs::read_to_string(&summary.report)
            .unwrap()
            .contains("- Fields enhanced: 2"));
        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("log.json")).unwrap())
                .unwrap();
        assert_eq!(json["improvement_summary"]["fields_enhanced"], 2);
    }

    #[test]
    fn test_unsupported_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("companies.json");
        let output = dir.path().join("enhanced.csv");
        fs::write(&input, "[]").unwrap();

        let result = execute(&cli(input, output.clone()));
        assert!(matches!(result, Err(AppError::UnsupportedFormat(_))));
        assert!(!output.exists());
        assert!(!storage::report_path_for(&output).exists());
    }
}
