//! Spinners for long-running apt-get calls.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a spinner with a message. Hidden when `quiet` is set.
pub fn spinner(msg: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Stop the spinner and clear its line.
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}
