use crate::scan_comparison::domain::DifferenceEntry;
use crate::shared::Result;

/// ReportFormatter port for rendering comparison results
///
/// This port abstracts the rendering of difference entries into a
/// human-readable report.
pub trait ReportFormatter {
    /// Renders the difference entries, in order
    ///
    /// An empty slice renders as a "no differences" notice rather than
    /// an empty string.
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, differences: &[DifferenceEntry]) -> Result<String>;
}
