use std::path::PathBuf;

/// ComparisonRequest - Internal request DTO for the scan comparison use case
#[derive(Debug, Clone)]
pub struct ComparisonRequest {
    /// Path to the baseline (earlier) scan export
    pub baseline_path: PathBuf,
    /// Path to the comparator (latest) scan export
    pub comparator_path: PathBuf,
}

impl ComparisonRequest {
    pub fn new(baseline_path: PathBuf, comparator_path: PathBuf) -> Self {
        Self {
            baseline_path,
            comparator_path,
        }
    }
}
