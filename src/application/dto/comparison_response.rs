use crate::scan_comparison::domain::{DifferenceEntry, Notice};

/// ComparisonResponse - Internal response DTO from the scan comparison use case
///
/// This DTO contains the comparison result, which adapters can then
/// render into the appropriate output format. Notices are also surfaced
/// live through the ProgressReporter while the comparison runs; the
/// collected copy here lets callers inspect them afterwards.
#[derive(Debug, Clone)]
pub struct ComparisonResponse {
    /// Issues whose host coverage shrank, in baseline order
    pub differences: Vec<DifferenceEntry>,
    /// Notices raised while matching issues, in discovery order
    pub notices: Vec<Notice>,
}

impl ComparisonResponse {
    pub fn new(differences: Vec<DifferenceEntry>, notices: Vec<Notice>) -> Self {
        Self {
            differences,
            notices,
        }
    }
}
