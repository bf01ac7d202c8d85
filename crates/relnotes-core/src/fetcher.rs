//! Completed-story search over a rolling date window

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use relnotes_integrations::{RawStory, StoryTracker, TrackerError};

/// Start of the search window for a given day.
///
/// `today - ((weekday + 1) % 7 + 2)` days with Sunday = 0. This always lands
/// on a Thursday, between 2 (Saturday) and 8 (Friday) days back.
#[must_use]
pub fn previous_friday(today: NaiveDate) -> NaiveDate {
    let weekday = i64::from(today.weekday().num_days_from_sunday());
    today - Duration::days((weekday + 1) % 7 + 2)
}

/// Inclusive completion-date window searched for done stories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SearchWindow {
    /// Window from [`previous_friday`] up to and including `today`
    #[must_use]
    pub fn ending(today: NaiveDate) -> Self {
        Self {
            start: previous_friday(today),
            end: today,
        }
    }

    /// Tracker search query for done stories completed inside the window
    #[must_use]
    pub fn query(&self) -> String {
        format!("state:done completed:{}..{}", self.start, self.end)
    }
}

impl fmt::Display for SearchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Collects every page of a story search
pub struct StoryFetcher<'a> {
    tracker: &'a dyn StoryTracker,
}

impl<'a> StoryFetcher<'a> {
    #[must_use]
    pub fn new(tracker: &'a dyn StoryTracker) -> Self {
        Self { tracker }
    }

    /// Run `query` and follow `next` cursors until a page omits one.
    ///
    /// Stories are returned in page order.
    ///
    /// # Errors
    ///
    /// Returns the first transport or parse error; no partial result is kept
    pub async fn fetch_all(&self, query: &str) -> Result<Vec<RawStory>, TrackerError> {
        log::debug!("Searching {} for: {query}", self.tracker.system_name());

        let (mut stories, mut next) = self.tracker.search_stories(query).await?.into_parts();
        let mut pages = 1;

        while let Some(cursor) = next {
            let (page, following) = self.tracker.next_page(&cursor).await?.into_parts();
            stories.extend(page);
            next = following;
            pages += 1;
        }

        log::debug!("Fetched {} stories across {pages} page(s)", stories.len());
        Ok(stories)
    }
}
