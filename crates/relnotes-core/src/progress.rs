/// Observer notified as the pipeline works through the fetched stories.
///
/// Purely observational; implementations must not affect the result.
pub trait ProgressObserver {
    /// Called once before the first story with the number of fetched stories
    fn on_start(&self, _total: usize) {}

    /// Called after each story, with `processed` counting from 1
    fn on_story(&self, processed: usize, total: usize);

    /// Called once when processing ends, successfully or not
    fn on_finish(&self) {}
}

/// Observer that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {
    fn on_story(&self, _processed: usize, _total: usize) {}
}
