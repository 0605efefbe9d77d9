use crate::scan_comparison::domain::ScanDocument;
use crate::shared::Result;
use std::path::Path;

/// ScanLoader port for loading scan export files
///
/// This port abstracts the file system and deserialization work needed
/// to turn a scan export path into a structured document.
pub trait ScanLoader {
    /// Loads the scan export at the given path
    ///
    /// # Arguments
    /// * `path` - Path to the scan export file
    ///
    /// # Returns
    /// The parsed scan document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid scan export
    fn load_scan(&self, path: &Path) -> Result<ScanDocument>;
}
