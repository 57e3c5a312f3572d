use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Starts a ticking spinner with `msg`; the caller clears it when the wait
/// ends.
pub fn start(msg: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}").unwrap();

    spinner.set_style(style);
    spinner.set_message(msg.to_string());
    spinner.enable_steady_tick(TICK_INTERVAL);
    spinner
}
