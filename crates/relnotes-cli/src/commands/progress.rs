//! Terminal progress bar for the story loop

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use relnotes_core::ProgressObserver;

const BAR_TEMPLATE: &str = "Progress: [{bar:50}] {percent}% ({pos}/{len})";

/// [`ProgressObserver`] drawing an in-place bar on stderr
///
/// The bar is registered with a [`MultiProgress`] so log output can suspend it.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    #[must_use]
    pub fn new(bars: &MultiProgress) -> Self {
        let bar = bars.add(ProgressBar::new(0));
        if let Ok(style) = ProgressStyle::with_template(BAR_TEMPLATE) {
            bar.set_style(style.progress_chars("=-"));
        }
        Self { bar }
    }
}

impl ProgressObserver for BarProgress {
    fn on_start(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn on_story(&self, processed: usize, _total: usize) {
        self.bar.set_position(processed as u64);
    }

    fn on_finish(&self) {
        self.bar.finish();
    }
}
