use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;
use std::time::Duration;

const SPINNER_TICK_MS: u64 = 100;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with the generator's
/// stdout. Long-running steps show an indicatif spinner, which indicatif
/// hides automatically when stderr is not a terminal (as under pre-commit).
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("   {spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.finish_spinner();
        let label = match message {
            Some(msg) => format!("[{}/{}] {}", current, total, msg),
            None => format!("[{}/{}]", current, total),
        };
        eprintln!("{}", label);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.set_message(message.unwrap_or_default().to_string());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_error(&self, message: &str) {
        self.finish_spinner();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.yellow())
        );
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!(
            "{}",
            message.if_supports_color(Stream::Stderr, |text| text.green())
        );
    }
}

impl Drop for StderrProgressReporter {
    fn drop(&mut self) {
        self.finish_spinner();
    }
}
