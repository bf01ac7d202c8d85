//! Release notes pipeline
//!
//! One sequential pass: fetch done stories, classify and filter them,
//! summarize the survivors, then sort the notes for rendering by epic.


use chrono::NaiveDate;
use relnotes_ai::Summarizer;
use relnotes_integrations::{RawStory, StoryTracker};

use crate::config::{Config, SummaryFailurePolicy};
use crate::epics::EpicNameIndex;
use crate::error::PipelineError;
use crate::fetcher::{SearchWindow, StoryFetcher};
use crate::group_filter::GroupFilter;
use crate::priority::{PriorityClassifier, PriorityDecision};
use crate::progress::{NoopProgress, ProgressObserver};
use crate::release_note::{sort_by_epic_name, ReleaseNote};
use crate::render::render_digest;

/// A story makes it into the notes only if all three hold
#[must_use]
pub fn is_included(
    decision: PriorityDecision,
    iteration_id: Option<i64>,
    group_eligible: bool,
) -> bool {
    decision.include && iteration_id.is_some() && group_eligible
}

/// Result of a run that found stories
#[derive(Debug, Clone)]
pub struct ReleaseDigest {
    pub window: SearchWindow,
    /// Stories returned by the search, before filtering
    pub fetched: usize,
    /// Notes sorted by epic name, unnamed epics last
    pub notes: Vec<ReleaseNote>,
    /// Stories dropped because their summary failed under [`SummaryFailurePolicy::Skip`]
    pub skipped: Vec<i64>,
}

impl ReleaseDigest {
    #[must_use]
    pub fn render(&self, permalink_base: &str) -> String {
        render_digest(&self.notes, permalink_base)
    }
}

#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The search returned nothing; no summaries were requested
    NoStories,
    Digest(ReleaseDigest),
}

/// Orchestrates fetch, classify, summarize and sort
pub struct ReleaseNotesPipeline<'a> {
    tracker: &'a dyn StoryTracker,
    summarizer: &'a dyn Summarizer,
    classifier: PriorityClassifier,
    group_filter: GroupFilter,
    failure_policy: SummaryFailurePolicy,
    progress: &'a dyn ProgressObserver,
}

impl<'a> ReleaseNotesPipeline<'a> {
    #[must_use]
    pub fn new(
        config: &Config,
        tracker: &'a dyn StoryTracker,
        summarizer: &'a dyn Summarizer,
    ) -> Self {
        Self {
            tracker,
            summarizer,
            classifier: PriorityClassifier::new(&config.priority),
            group_filter: GroupFilter::new(&config.teams),
            failure_policy: config.pipeline.on_summary_failure,
            progress: &NoopProgress,
        }
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a dyn ProgressObserver) -> Self {
        self.progress = progress;
        self
    }

    /// Classify a story and apply the inclusion rule
    #[must_use]
    pub fn admit(&self, story: &RawStory) -> Option<PriorityDecision> {
        let decision = self.classifier.classify(story);
        let eligible = self.group_filter.is_eligible(story.group_id.as_deref());
        is_included(decision, story.iteration_id, eligible).then_some(decision)
    }

    /// Run the pipeline for the window ending on `today`
    ///
    /// # Errors
    ///
    /// Returns an error if the tracker cannot be read, or if a summary fails
    /// under [`SummaryFailurePolicy::Abort`]
    pub async fn run(&self, today: NaiveDate) -> Result<RunOutcome, PipelineError> {
        let window = SearchWindow::ending(today);
        let stories = StoryFetcher::new(self.tracker)
            .fetch_all(&window.query())
            .await?;

        if stories.is_empty() {
            log::info!("No stories completed in {window}");
            return Ok(RunOutcome::NoStories);
        }
        log::info!("Number of stories (pre-filter): {}", stories.len());

        let epics = EpicNameIndex::load(self.tracker).await?;

        let total = stories.len();
        self.progress.on_start(total);
        let result = self.build_notes(&stories, &epics).await;
        self.progress.on_finish();
        let (notes, skipped) = result?;

        log::info!("{} of {total} stories made the release notes", notes.len());

        Ok(RunOutcome::Digest(ReleaseDigest {
            window,
            fetched: total,
            notes: sort_by_epic_name(&notes),
            skipped,
        }))
    }

    async fn build_notes(
        &self,
        stories: &[RawStory],
        epics: &EpicNameIndex,
    ) -> Result<(Vec<ReleaseNote>, Vec<i64>), PipelineError> {
        let total = stories.len();
        let mut notes = Vec::new();
        let mut skipped = Vec::new();

        for (index, story) in stories.iter().enumerate() {
            if let Some(decision) = self.admit(story) {
                let description = story.description.as_deref().unwrap_or_default();
                match self.summarizer.summarize(&story.name, description).await {
                    Ok(text) => notes.push(ReleaseNote::from_story(
                        story,
                        text,
                        decision.priority,
                        epics.name(story.epic_id),
                    )),
                    Err(source) => match self.failure_policy {
                        SummaryFailurePolicy::Abort => {
                            return Err(PipelineError::Summarization {
                                story_id: story.id,
                                source,
                            });
                        }
                        SummaryFailurePolicy::Skip => {
                            log::warn!("Skipping story {}: {source}", story.id);
                            skipped.push(story.id);
                        }
                    },
                }
            } else {
                log::debug!("Story {} filtered out", story.id);
            }
            self.progress.on_story(index + 1, total);
        }

        Ok((notes, skipped))
    }
}
