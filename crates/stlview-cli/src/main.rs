//! stlview CLI - validate STL files and report model metrics
//!
//! Mirrors what the browser viewer shows after a file is dropped: the
//! validation verdict, then vertex count, face count and bounding-box size.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use stlview_core::{validate_with_limits, ErrorKind, SniffLimits, StlError};
use stlview_loader::{read_model_file, LoadedModel};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod report;

use config::CliConfig;
use report::CompareReport;

#[derive(Parser)]
#[command(name = "stlview")]
#[command(about = "Validate STL files and report model metrics", long_about = None)]
struct Cli {
    /// TOML file overriding the binary sniffing limits
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that files look like ASCII or binary STL
    Validate {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Load a model and print its metrics
    Info {
        /// Path to the .stl file
        file: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Load two models and print their metrics side by side
    Compare {
        /// Left model
        left: PathBuf,
        /// Right model
        right: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CliConfig::load(cli.config.as_deref())?;
    info!(
        config = ?cli.config,
        size_tolerance = config.limits.size_tolerance,
        max_triangle_count = config.limits.max_triangle_count,
        "limits loaded"
    );

    match cli.command {
        Commands::Validate { files } => validate_files(&files, &config.limits),
        Commands::Info { file, json } => show_info(&file, json, &config.limits),
        Commands::Compare { left, right, json } => compare(&left, &right, json, &config.limits),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn validate_path(path: &Path, limits: &SniffLimits) -> Result<(), StlError> {
    let bytes = std::fs::read(path)
        .map_err(|e| ErrorKind::ReadError.with_details(format!("{}: {e}", path.display())))?;
    validate_with_limits(&file_name(path), &bytes, limits).into_result()
}

fn validate_files(files: &[PathBuf], limits: &SniffLimits) -> Result<()> {
    let outcomes: Vec<_> = files
        .par_iter()
        .map(|path| (path, validate_path(path, limits)))
        .collect();

    let mut failed = 0;
    for (path, outcome) in &outcomes {
        if let Err(err) = outcome {
            warn!(path = %path.display(), kind = %err.kind(), "validation failed");
            failed += 1;
        }
        println!("{}", report::validation_line(&path.display().to_string(), outcome));
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files failed validation", failed, files.len());
    }
    Ok(())
}

fn load(path: &Path, limits: &SniffLimits) -> Result<LoadedModel> {
    read_model_file(path, limits).with_context(|| format!("loading {}", path.display()))
}

fn show_info(file: &Path, json: bool, limits: &SniffLimits) -> Result<()> {
    let model = load(file, limits)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&model.summary())?);
    } else {
        println!("{}", report::info_block(&model.summary()));
    }
    Ok(())
}

fn compare(left: &Path, right: &Path, json: bool, limits: &SniffLimits) -> Result<()> {
    let (left, right) = rayon::join(|| load(left, limits), || load(right, limits));
    let (left, right) = (left?, right?);

    let report = CompareReport::new(left.summary(), right.summary());
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_compare() {
        let cli = Cli::try_parse_from(["stlview", "-vv", "compare", "a.stl", "b.stl", "--json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Compare { json: true, .. }));
    }

    #[test]
    fn test_validate_requires_files() {
        assert!(Cli::try_parse_from(["stlview", "validate"]).is_err());
    }

    #[test]
    fn test_validate_missing_file_is_read_error() {
        let err = validate_path(
            Path::new("/no/such/dir/part.stl"),
            &SniffLimits::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReadError);
    }

    #[test]
    fn test_validate_files_reports_failures() {
        let files = [PathBuf::from("/no/such/dir/a.stl"), PathBuf::from("/no/such/dir/b.stl")];
        let err = validate_files(&files, &SniffLimits::default()).unwrap_err();
        assert_eq!(err.to_string(), "2 of 2 files failed validation");
    }
}
