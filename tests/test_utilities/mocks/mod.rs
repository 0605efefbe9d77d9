mod mock_progress_reporter;
mod mock_scan_loader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_scan_loader::MockScanLoader;
