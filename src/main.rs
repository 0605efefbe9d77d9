mod adapters;
mod application;
mod cli;
mod ports;
mod scan_comparison;
mod shared;

use adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
use adapters::outbound::filesystem::FileSystemScanLoader;
use adapters::outbound::formatters::TableReportFormatter;
use application::dto::ComparisonRequest;
use application::use_cases::CompareScansUseCase;
use cli::Args;
use ports::outbound::{OutputPresenter, ReportFormatter};
use shared::error::{ExitCode, ScanDiffError};
use shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    validate_scan_path(&args.baseline)?;
    validate_scan_path(&args.comparator)?;

    // Create adapters (Dependency Injection)
    let scan_loader = FileSystemScanLoader::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = CompareScansUseCase::new(scan_loader, progress_reporter);

    // Execute use case
    let request = ComparisonRequest::new(args.baseline, args.comparator);
    let response = use_case.execute(request)?;

    // Render and present the report
    let formatter = TableReportFormatter::new();
    let report = formatter.format(&response.differences)?;

    let presenter = StdoutPresenter::new();
    presenter.present(&report)?;

    Ok(())
}

fn validate_scan_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ScanDiffError::InvalidScanPath {
            path: path.to_path_buf(),
            reason: "File does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for scan file paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| ScanDiffError::InvalidScanPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ScanDiffError::InvalidScanPath {
            path: path.to_path_buf(),
            reason: "Security: Scan file path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(ScanDiffError::InvalidScanPath {
            path: path.to_path_buf(),
            reason: "Not a regular file".to_string(),
        }
        .into());
    }

    Ok(())
}
