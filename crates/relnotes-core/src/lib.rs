pub mod config;
pub mod epics;
pub mod error;
pub mod fetcher;
pub mod group_filter;
pub mod pipeline;
pub mod priority;
pub mod progress;
pub mod release_note;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{
    Config, PipelineSettings, PriorityConfig, PriorityRule, ShortcutConfig, SummaryFailurePolicy,
    TeamConfig,
};
pub use epics::EpicNameIndex;
pub use error::{ConfigError, PipelineError};
pub use fetcher::{previous_friday, SearchWindow, StoryFetcher};
pub use group_filter::GroupFilter;
pub use pipeline::{is_included, ReleaseDigest, ReleaseNotesPipeline, RunOutcome};
pub use priority::{Priority, PriorityClassifier, PriorityDecision};
pub use progress::{NoopProgress, ProgressObserver};
pub use release_note::{
    sort_by_completed_date, sort_by_epic_name, sort_by_priority, sort_by_story_points,
    ReleaseNote, StoryPoints,
};
pub use render::{parse_rendered_line, render_digest, render_line, RenderedLine};
