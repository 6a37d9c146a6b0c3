/// ProgressReporter port for reporting progress during a run
///
/// This port abstracts progress reporting (e.g., to stderr) so the hook can
/// give feedback while the environment is built. Implementations must never
/// write to stdout, which belongs to the generator.
pub trait ProgressReporter {
    /// Reports a progress message on its own line
    ///
    /// Ends any step started with [`ProgressReporter::report_progress`].
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Starts step `current` of `total`, which stays active until the next
    /// report of any kind
    ///
    /// # Arguments
    /// * `current` - Current step number (1-based)
    /// * `total` - Total number of steps
    /// * `message` - Optional description of the step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
