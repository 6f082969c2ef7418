//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use spend_model::ReportingPeriod;

#[derive(Parser)]
#[command(
    name = "spend-json",
    version,
    about = "Normalize monthly government spending spreadsheets into JSON",
    long_about = "Normalize a monthly 'spend over £25,000' publication (CSV or workbook)\n\
                  into a fixed-schema JSON dataset with provenance, quality and\n\
                  aggregate metadata."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// TOML configuration with dataset profile and extra aliases.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize one month's source file and write its JSON document.
    Run(RunArgs),

    /// List the header aliases recognised for each canonical field.
    Aliases,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Source file (.csv, .xlsx, .xlsm, .xls or .ods).
    #[arg(long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Reporting month as YYYY-MM (default: the previous calendar month).
    #[arg(long = "month", value_name = "YYYY-MM")]
    pub month: Option<ReportingPeriod>,

    /// Root directory; output goes to <ROOT>/<year>/<year>-<month>.json.
    #[arg(long = "output-root", value_name = "DIR", default_value = "data")]
    pub output_root: PathBuf,

    /// URL the source file was downloaded from.
    #[arg(long = "source-url", value_name = "URL")]
    pub source_url: Option<String>,

    /// Publication page URL (default: derived from the month).
    #[arg(long = "publication-url", value_name = "URL")]
    pub publication_url: Option<String>,

    /// MIME type of the source (default: derived from the extension).
    #[arg(long = "content-type", value_name = "MIME")]
    pub content_type: Option<String>,

    /// Worksheet to read instead of automatic selection.
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_run_arguments() {
        let cli = Cli::try_parse_from([
            "spend-json",
            "run",
            "--input",
            "hmt.xlsx",
            "--month",
            "2025-01",
            "--sheet",
            "Data",
        ])
        .unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert_eq!(args.month, Some(ReportingPeriod::new(2025, 1).unwrap()));
        assert_eq!(args.sheet.as_deref(), Some("Data"));
        assert_eq!(args.output_root, PathBuf::from("data"));
    }

    #[test]
    fn rejects_malformed_month() {
        assert!(
            Cli::try_parse_from(["spend-json", "run", "--input", "x.csv", "--month", "2025-13"])
                .is_err()
        );
    }
}
