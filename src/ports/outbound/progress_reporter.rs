use crate::scan_comparison::domain::Notice;

/// ProgressReporter port for narrating the run
///
/// Progress lines and notices go to a side channel (stderr for the
/// console adapter) so the rendered report on stdout stays pipeable.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a non-fatal notice raised while matching issues
    fn report_notice(&self, notice: &Notice);

    /// Reports the final summary once the comparison completes
    fn report_completion(&self, message: &str);
}
