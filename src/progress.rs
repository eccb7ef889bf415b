use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressTracker {
    progress_bar: ProgressBar,
}

impl ProgressTracker {
    /// Bar for a body of known length, spinner otherwise.
    pub fn new(total_size: Option<u64>, filename: &str) -> Self {
        let pb = match total_size {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::with_template(
                        "{msg} [{bar:40.cyan/blue}] {bytes:>8}/{total_bytes:>8} ({percent:>3}%) ETA: {eta}",
                    )
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
                );
                pb
            }
            None => ProgressBar::new_spinner(),
        };

        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(filename.to_string());

        Self { progress_bar: pb }
    }

    pub fn update(&self, progress: u64) {
        self.progress_bar.set_position(progress);
    }

    /// Clears the bar once the body is fully written.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    /// Leaves the bar where it stopped so a failed transfer stays visible.
    pub fn abandon(&self) {
        self.progress_bar.abandon();
    }
}
