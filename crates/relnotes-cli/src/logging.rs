//! Logger setup
//!
//! Records go through `env_logger`, but are written with every progress bar
//! suspended so a warning in the middle of the story loop does not tear the
//! bar that is being redrawn on the same stream.

use indicatif::MultiProgress;
use log::{Log, Metadata, Record, SetLoggerError};

pub struct BarAwareLogger {
    inner: env_logger::Logger,
    bars: MultiProgress,
}

impl BarAwareLogger {
    #[must_use]
    pub fn new(inner: env_logger::Logger, bars: MultiProgress) -> Self {
        Self { inner, bars }
    }
}

impl Log for BarAwareLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.inner.enabled(record.metadata()) {
            self.bars.suspend(|| self.inner.log(record));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Install the global logger; `RUST_LOG` wins over the verbosity flag
///
/// # Errors
///
/// Returns an error if a logger was already installed
pub fn init(verbose: bool, bars: MultiProgress) -> Result<(), SetLoggerError> {
    let default_filter = if verbose { "debug" } else { "info" };
    let inner =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
            .format_timestamp_secs()
            .build();
    let max_level = inner.filter();

    log::set_boxed_logger(Box::new(BarAwareLogger::new(inner, bars)))?;
    log::set_max_level(max_level);
    Ok(())
}
