//! Shared fakes and builders for unit tests

use std::sync::Mutex;

use async_trait::async_trait;
use relnotes_ai::{SummarizationError, Summarizer};
use relnotes_integrations::{
    CustomField, Epic, Group, RawStory, StorySearchPage, StoryTracker, TrackerError,
};

use crate::priority::Priority;
use crate::progress::ProgressObserver;
use crate::release_note::{ReleaseNote, StoryPoints};

pub fn story(id: i64) -> RawStory {
    RawStory {
        id,
        name: format!("Story {id}"),
        description: None,
        completed_at: None,
        estimate: None,
        iteration_id: None,
        epic_id: None,
        group_id: None,
        custom_fields: Vec::new(),
    }
}

pub fn page(ids: &[i64], next: Option<&str>) -> StorySearchPage {
    StorySearchPage {
        data: Some(ids.iter().map(|id| story(*id)).collect()),
        next: next.map(str::to_string),
        total: None,
    }
}

pub fn note(id: i64, epic: Option<&str>) -> ReleaseNote {
    ReleaseNote::new(
        format!("Note {id}"),
        Priority::P0,
        None,
        StoryPoints::Unestimated,
        epic.map(str::to_string),
        id,
    )
}

/// In-memory tracker serving a fixed sequence of search pages
#[derive(Default)]
pub struct FakeTracker {
    pages: Vec<StorySearchPage>,
    epics: Vec<Epic>,
    fail_at: Option<usize>,
    position: Mutex<usize>,
    queries: Mutex<Vec<String>>,
    followed: Mutex<Vec<String>>,
    epic_calls: Mutex<usize>,
}

impl FakeTracker {
    pub fn new(pages: Vec<StorySearchPage>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn with_epics(mut self, epics: Vec<Epic>) -> Self {
        self.epics = epics;
        self
    }

    /// Make the page at `index` (0 = initial search) fail with HTTP 500
    pub fn failing_page(mut self, index: usize) -> Self {
        self.fail_at = Some(index);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }

    pub fn followed(&self) -> Vec<String> {
        self.followed.lock().unwrap().clone()
    }

    pub fn epic_calls(&self) -> usize {
        *self.epic_calls.lock().unwrap()
    }

    fn page_at(&self, index: usize) -> Result<StorySearchPage, TrackerError> {
        if self.fail_at == Some(index) {
            return Err(TrackerError::Http {
                api: "Fake".to_string(),
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl StoryTracker for FakeTracker {
    async fn search_stories(&self, query: &str) -> Result<StorySearchPage, TrackerError> {
        self.queries.lock().unwrap().push(query.to_string());
        *self.position.lock().unwrap() = 0;
        self.page_at(0)
    }

    async fn next_page(&self, next: &str) -> Result<StorySearchPage, TrackerError> {
        self.followed.lock().unwrap().push(next.to_string());
        let index = {
            let mut position = self.position.lock().unwrap();
            *position += 1;
            *position
        };
        self.page_at(index)
    }

    async fn list_epics(&self) -> Result<Vec<Epic>, TrackerError> {
        *self.epic_calls.lock().unwrap() += 1;
        Ok(self.epics.clone())
    }

    async fn list_custom_fields(&self) -> Result<Vec<CustomField>, TrackerError> {
        Ok(Vec::new())
    }

    async fn list_groups(&self) -> Result<Vec<Group>, TrackerError> {
        Ok(Vec::new())
    }

    fn system_name(&self) -> &'static str {
        "Fake"
    }
}

/// Summarizer echoing the title, failing for selected titles
#[derive(Default)]
pub struct FakeSummarizer {
    fail_for: Vec<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeSummarizer {
    pub fn failing_for(titles: &[&str]) -> Self {
        Self {
            fail_for: titles.iter().map(|t| (*t).to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Titles passed to `summarize`, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(
        &self,
        title: &str,
        _description: &str,
    ) -> Result<String, SummarizationError> {
        self.calls.lock().unwrap().push(title.to_string());
        if self.fail_for.iter().any(|t| t == title) {
            return Err(SummarizationError::EmptyResponse);
        }
        Ok(format!("Summary of {title}."))
    }
}

/// Progress observer recording every notification
#[derive(Default)]
pub struct RecordingProgress {
    pub started: Mutex<Option<usize>>,
    pub steps: Mutex<Vec<(usize, usize)>>,
    pub finished: Mutex<usize>,
}

impl ProgressObserver for RecordingProgress {
    fn on_start(&self, total: usize) {
        *self.started.lock().unwrap() = Some(total);
    }

    fn on_story(&self, processed: usize, total: usize) {
        self.steps.lock().unwrap().push((processed, total));
    }

    fn on_finish(&self) {
        *self.finished.lock().unwrap() += 1;
    }
}
