use crate::application::dto::{ComparisonRequest, ComparisonResponse};
use crate::ports::inbound::ScanComparisonPort;
use crate::ports::outbound::{ProgressReporter, ScanLoader};
use crate::scan_comparison::domain::{DifferenceEntry, NormalizedIssue, Notice, ScanDocument};
use crate::scan_comparison::services::{Differ, Normalizer};
use crate::shared::Result;
use std::path::Path;

/// CompareScansUseCase - Core use case for scan comparison
///
/// This use case orchestrates the comparison workflow (load both
/// exports, normalize, diff) using generic dependency injection for
/// all infrastructure dependencies.
///
/// # Type Parameters
/// * `SL` - ScanLoader implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareScansUseCase<SL, PR> {
    scan_loader: SL,
    progress_reporter: PR,
}

impl<SL, PR> CompareScansUseCase<SL, PR>
where
    SL: ScanLoader,
    PR: ProgressReporter,
{
    /// Creates a new CompareScansUseCase with injected dependencies
    pub fn new(scan_loader: SL, progress_reporter: PR) -> Self {
        Self {
            scan_loader,
            progress_reporter,
        }
    }

    /// Executes the scan comparison use case
    ///
    /// Loads and normalizes both exports, then diffs them. Notices
    /// (missing or ambiguous issue names) are reported as they are
    /// discovered and also collected into the response; difference
    /// entries are only surfaced once the whole baseline has been
    /// processed.
    ///
    /// # Errors
    /// Returns an error if either scan file cannot be loaded. A load
    /// failure aborts the comparison rather than degrading it to a
    /// comparison against an empty document.
    pub fn execute(&self, request: ComparisonRequest) -> Result<ComparisonResponse> {
        let baseline = self.load_and_report("baseline", &request.baseline_path)?;
        let comparator = self.load_and_report("latest", &request.comparator_path)?;

        self.progress_reporter.report("🔍 Comparing scans...");

        let mut notices = Vec::new();
        let mut sink = |notice: Notice| {
            self.progress_reporter.report_notice(&notice);
            notices.push(notice);
        };
        let differences = Differ::diff(&baseline, &comparator, &mut sink);

        self.report_summary(&differences, &notices);

        Ok(ComparisonResponse::new(differences, notices))
    }

    /// Loads one scan export, reports progress, and normalizes it
    fn load_and_report(&self, label: &str, path: &Path) -> Result<Vec<NormalizedIssue>> {
        self.progress_reporter
            .report(&format!("📖 Loading {} scan: {}", label, path.display()));

        let document: ScanDocument = self.scan_loader.load_scan(path)?;

        self.progress_reporter
            .report(&format!("✅ Detected {} issue(s)", document.issues.len()));

        Ok(Normalizer::normalize(&document))
    }

    fn report_summary(&self, differences: &[DifferenceEntry], notices: &[Notice]) {
        let message = if differences.is_empty() {
            match notices.len() {
                0 => "✅ Comparison complete: no hosts dropped out".to_string(),
                n => format!(
                    "✅ Comparison complete: no hosts dropped out ({} issue(s) skipped)",
                    n
                ),
            }
        } else {
            format!(
                "✅ Comparison complete: {} issue(s) lost affected hosts",
                differences.len()
            )
        };
        self.progress_reporter.report_completion(&message);
    }
}

impl<SL, PR> ScanComparisonPort for CompareScansUseCase<SL, PR>
where
    SL: ScanLoader,
    PR: ProgressReporter,
{
    fn compare_scans(&self, request: ComparisonRequest) -> Result<ComparisonResponse> {
        self.execute(request)
    }
}
