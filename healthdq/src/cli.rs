// healthdq/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthdq")]
#[command(about = "Data quality checks for tabular healthcare records", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🩺 Validates a CSV file (or the demo dataset) and prints the quality report
    Check(CheckArgs),

    /// 🧽 Writes a cleaned copy of the input (duplicates dropped or missing cells filled)
    Export(ExportArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// CSV file to load (header row required)
    pub file: Option<PathBuf>,

    /// Load the built-in demo dataset instead of a file
    #[arg(long, conflicts_with = "file")]
    pub demo: bool,

    /// Configuration file (default: healthdq.yaml in the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Expected column types, e.g. "age:int, admission_date:date"
    #[arg(long, short)]
    pub types: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with code 1 when at least one rule is violated
    #[arg(long)]
    pub fail_on_violation: bool,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Drop duplicate rows, keeping the first of each group
    #[arg(long, conflicts_with = "fill", required_unless_present = "fill")]
    pub dedupe: bool,

    /// Columns that identify a duplicate (default: the whole row)
    #[arg(long, requires = "dedupe", value_delimiter = ',')]
    pub by: Vec<String>,

    /// Replace every missing cell with the placeholder
    #[arg(long)]
    pub fill: bool,

    /// Placeholder written by --fill (default: MISSING, or the configured one)
    #[arg(long, requires = "fill")]
    pub placeholder: Option<String>,

    /// Destination CSV file
    #[arg(long, short)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_check_defaults() -> Result<()> {
        let args = Cli::parse_from(["healthdq", "check", "records.csv"]);
        match args.command {
            Commands::Check(check) => {
                assert_eq!(
                    check.input.file.map(|p| p.to_string_lossy().into_owned()),
                    Some("records.csv".to_string())
                );
                assert!(!check.input.demo);
                assert_eq!(check.format, OutputFormat::Text);
                assert_eq!(check.types, None);
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_parse_check_demo_json() -> Result<()> {
        let args = Cli::parse_from([
            "healthdq",
            "check",
            "--demo",
            "--format",
            "json",
            "-t",
            "age:int",
        ]);
        match args.command {
            Commands::Check(check) => {
                assert!(check.input.demo);
                assert_eq!(check.format, OutputFormat::Json);
                assert_eq!(check.types.as_deref(), Some("age:int"));
                Ok(())
            }
            _ => bail!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_rejects_file_with_demo() {
        let res = Cli::try_parse_from(["healthdq", "check", "a.csv", "--demo"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_cli_parse_export_dedupe_by() -> Result<()> {
        let args = Cli::parse_from([
            "healthdq",
            "export",
            "a.csv",
            "--dedupe",
            "--by",
            "patient_id,admission_date",
            "-o",
            "out.csv",
        ]);
        match args.command {
            Commands::Export(export) => {
                assert!(export.dedupe);
                assert_eq!(export.by, vec!["patient_id", "admission_date"]);
                Ok(())
            }
            _ => bail!("Expected Export command"),
        }
    }

    #[test]
    fn test_cli_export_requires_a_mode() {
        assert!(Cli::try_parse_from(["healthdq", "export", "a.csv", "-o", "out.csv"]).is_err());
        assert!(
            Cli::try_parse_from(["healthdq", "export", "--demo", "--dedupe", "--fill", "-o", "x"])
                .is_err()
        );
    }
}
