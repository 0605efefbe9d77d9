use crate::application::dto::{ComparisonRequest, ComparisonResponse};
use crate::shared::Result;

/// ScanComparisonPort - Inbound port for the scan comparison use case
///
/// This port defines the interface that external adapters (CLI, etc.)
/// use to trigger a comparison. It represents the application's public API.
pub trait ScanComparisonPort {
    /// Compares a baseline scan export against a later one
    ///
    /// # Arguments
    /// * `request` - Request carrying the two scan file paths
    ///
    /// # Returns
    /// A response containing the difference entries and any notices
    /// raised while matching issues
    ///
    /// # Errors
    /// Returns an error if either scan file cannot be read or parsed
    fn compare_scans(&self, request: ComparisonRequest) -> Result<ComparisonResponse>;
}
