use crate::ports::outbound::ProgressReporter;
use crate::scan_comparison::domain::Notice;
use owo_colors::OwoColorize;

/// StderrProgressReporter adapter for narrating the run on stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the report on
/// stdout. Notices are highlighted so skipped issues stand out in the
/// stream of progress lines.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_notice(&self, notice: &Notice) {
        eprintln!("⚠️  {}", notice.to_string().yellow());
    }

    fn report_completion(&self, message: &str) {
        eprintln!();
        eprintln!("{}", message);
    }
}
