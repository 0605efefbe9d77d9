//! scandiff - scan comparison tool for vulnerability exports
//!
//! This library compares two vulnerability-scan export files and reports,
//! for each issue present in the first file, which affected hosts are no
//! longer reported as affected in the second file. It follows hexagonal
//! architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`scan_comparison`): Pure data model plus the
//!   normalization and diffing services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scandiff::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let scan_loader = FileSystemScanLoader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = CompareScansUseCase::new(scan_loader, progress_reporter);
//!
//! // Execute
//! let request = ComparisonRequest::new(
//!     PathBuf::from("baseline.json"),
//!     PathBuf::from("latest.json"),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Render the report
//! let formatter = TableReportFormatter::new();
//! let report = formatter.format(&response.differences)?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod scan_comparison;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::FileSystemScanLoader;
    pub use crate::adapters::outbound::formatters::TableReportFormatter;
    pub use crate::application::dto::{ComparisonRequest, ComparisonResponse};
    pub use crate::application::use_cases::CompareScansUseCase;
    pub use crate::ports::inbound::ScanComparisonPort;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, ScanLoader,
    };
    pub use crate::scan_comparison::domain::{
        DifferenceEntry, HostKey, HostRecord, IssueRecord, NormalizedHost, NormalizedIssue,
        Notice, ScanDocument,
    };
    pub use crate::scan_comparison::services::{Differ, Normalizer, NoticeSink};
    pub use crate::shared::Result;
}
