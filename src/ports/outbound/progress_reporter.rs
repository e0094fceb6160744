/// ProgressReporter port for reporting task progress
///
/// Abstracts the diagnostic channel (e.g. stderr) used for user feedback
/// while a request is resolved and the engine runs.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports a non-fatal warning (e.g. a verbosity fallback)
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Marks the start of a long-running engine invocation
    fn engine_started(&self, message: &str);

    /// Marks the end of the engine invocation
    fn engine_finished(&self, message: &str);
}
