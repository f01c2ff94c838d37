//! Terminal output — spinner and colored result lines.
//!
//! Uses `indicatif` for the run spinner and `console` for styling. The
//! [`RunProgress`] tracks one pipeline run visually in the terminal.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::job::CompletedJob;

/// Visual progress indicator for one pipeline run.
pub struct RunProgress {
    pb: ProgressBar,
    green: Style,
    red: Style,
}

impl RunProgress {
    /// Start the spinner for `operation` applied to `file`.
    pub fn start(operation: &str, file: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("invalid template"),
        );
        pb.set_message(format!("{operation}: {file}"));
        pb.enable_steady_tick(std::time::Duration::from_millis(100));

        Self {
            pb,
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
        }
    }

    /// Update the spinner to reflect the current pipeline stage.
    pub fn stage(&self, message: &str) {
        self.pb.set_message(message.to_string());
    }

    /// Finish the spinner with a success line.
    pub fn success(&self, message: &str) {
        self.pb.finish_and_clear();
        println!("  {} {message}", self.green.apply_to("✓"));
    }

    /// Finish the spinner with a failure line.
    pub fn failure(&self, message: &str) {
        self.pb.finish_and_clear();
        eprintln!("  {} {message}", self.red.apply_to("✗"));
    }

    /// Print the completed job's artifact details as pretty JSON.
    pub fn print_result(&self, job: &CompletedJob) {
        println!();
        println!("{}", self.green.apply_to("─── Job Result ───"));
        println!("{}", serde_json::to_string_pretty(job).unwrap_or_default());
    }
}
