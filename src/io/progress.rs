//! Progress display across the montage instances of one invocation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static INSTANCE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Montages: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// One progress bar advanced once per rendered instance
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Bar sized for `instances` montages
    pub fn new(instances: usize) -> Self {
        let bar = ProgressBar::new(instances as u64);
        bar.set_style(INSTANCE_STYLE.clone());
        Self { bar }
    }

    /// Show which output is being produced
    pub fn start_instance(&self, output_name: &str) {
        self.bar.set_message(output_name.to_string());
    }

    /// Count one finished instance
    pub fn complete_instance(&self) {
        self.bar.inc(1);
    }

    /// Number of instances completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the bar
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
