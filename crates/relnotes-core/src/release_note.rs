//! Release note record and ordering utilities
//!
//! Every sort here is stable and returns a new collection, leaving the input
//! untouched.

use std::cmp::Reverse;
use std::fmt;

use chrono::NaiveDate;
use relnotes_integrations::RawStory;

use crate::priority::Priority;

/// Story point estimate, or the "N/A" sentinel for unestimated stories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryPoints {
    Estimated(i64),
    Unestimated,
}

impl StoryPoints {
    /// Value used for ranking; unestimated counts as zero
    #[must_use]
    pub fn ranking_value(self) -> i64 {
        match self {
            Self::Estimated(points) => points,
            Self::Unestimated => 0,
        }
    }
}

impl From<Option<i64>> for StoryPoints {
    fn from(estimate: Option<i64>) -> Self {
        estimate.map_or(Self::Unestimated, Self::Estimated)
    }
}

impl fmt::Display for StoryPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Estimated(points) => write!(f, "{points}"),
            Self::Unestimated => f.write_str("N/A"),
        }
    }
}

/// One line of the release notes
///
/// Only stories that passed classification and group filtering become a
/// `ReleaseNote`; the record is immutable once built. The note text is kept on
/// a single line, whitespace runs (line breaks included) collapse to one space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNote {
    note: String,
    priority: Priority,
    completed_date: Option<NaiveDate>,
    story_points: StoryPoints,
    epic_name: Option<String>,
    story_id: i64,
}

impl ReleaseNote {
    #[must_use]
    pub fn new(
        note: String,
        priority: Priority,
        completed_date: Option<NaiveDate>,
        story_points: StoryPoints,
        epic_name: Option<String>,
        story_id: i64,
    ) -> Self {
        Self {
            note: single_line(&note),
            priority,
            completed_date,
            story_points,
            epic_name,
            story_id,
        }
    }

    /// Build a note for a story that has already been admitted
    #[must_use]
    pub fn from_story(
        story: &RawStory,
        note: String,
        priority: Priority,
        epic_name: Option<&str>,
    ) -> Self {
        Self::new(
            note,
            priority,
            story.completed_at.map(|at| at.date_naive()),
            story.estimate.into(),
            epic_name.map(str::to_string),
            story.id,
        )
    }

    #[must_use]
    pub fn note(&self) -> &str {
        &self.note
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub fn completed_date(&self) -> Option<NaiveDate> {
        self.completed_date
    }

    /// Completion date as `YYYY-MM-DD`, empty when unknown
    #[must_use]
    pub fn completed_date_string(&self) -> String {
        self.completed_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn story_points(&self) -> StoryPoints {
        self.story_points
    }

    #[must_use]
    pub fn epic_name(&self) -> Option<&str> {
        self.epic_name.as_deref()
    }

    /// Epic name used for grouping: empty names count as no epic
    #[must_use]
    pub fn epic_group(&self) -> Option<&str> {
        self.epic_name().filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn story_id(&self) -> i64 {
        self.story_id
    }

    #[must_use]
    pub fn permalink(&self, permalink_base: &str) -> String {
        format!("{}/{}", permalink_base.trim_end_matches('/'), self.story_id)
    }
}

/// P0 first, N/A last
#[must_use]
pub fn sort_by_priority(notes: &[ReleaseNote]) -> Vec<ReleaseNote> {
    let mut sorted = notes.to_vec();
    sorted.sort_by_key(|n| n.priority.rank());
    sorted
}

/// Largest estimate first; "N/A" ranks as zero
#[must_use]
pub fn sort_by_story_points(notes: &[ReleaseNote]) -> Vec<ReleaseNote> {
    let mut sorted = notes.to_vec();
    sorted.sort_by_key(|n| Reverse(n.story_points.ranking_value()));
    sorted
}

/// Oldest completion first; notes without a date come first
#[must_use]
pub fn sort_by_completed_date(notes: &[ReleaseNote]) -> Vec<ReleaseNote> {
    let mut sorted = notes.to_vec();
    sorted.sort_by_key(|n| n.completed_date);
    sorted
}

/// Epic name ascending, notes without an epic (absent or empty name) last
#[must_use]
pub fn sort_by_epic_name(notes: &[ReleaseNote]) -> Vec<ReleaseNote> {
    let mut sorted = notes.to_vec();
    sorted.sort_by(|a, b| {
        let (a, b) = (a.epic_group(), b.epic_group());
        a.is_none().cmp(&b.is_none()).then_with(|| a.cmp(&b))
    });
    sorted
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{note, story};
    use chrono::{TimeZone, Utc};

    fn ids(notes: &[ReleaseNote]) -> Vec<i64> {
        notes.iter().map(ReleaseNote::story_id).collect()
    }

    #[test]
    fn test_story_points_display() {
        assert_eq!(StoryPoints::Estimated(5).to_string(), "5");
        assert_eq!(StoryPoints::Unestimated.to_string(), "N/A");
        assert_eq!(StoryPoints::from(None), StoryPoints::Unestimated);
        assert_eq!(StoryPoints::from(Some(2)), StoryPoints::Estimated(2));
    }

    #[test]
    fn test_note_is_kept_on_one_line() {
        let built = ReleaseNote::new(
            "line one\n  line two\r\n\tthree ".to_string(),
            Priority::P2,
            None,
            StoryPoints::Unestimated,
            None,
            7,
        );
        assert_eq!(built.note(), "line one line two three");
    }

    #[test]
    fn test_from_story() {
        let mut raw = story(42);
        raw.completed_at = Some(Utc.with_ymd_and_hms(2024, 5, 9, 23, 59, 0).unwrap());
        raw.estimate = Some(3);

        let built = ReleaseNote::from_story(&raw, "Did a thing.".to_string(), Priority::P1, Some("Epic"));

        assert_eq!(built.story_id(), 42);
        assert_eq!(built.note(), "Did a thing.");
        assert_eq!(built.priority(), Priority::P1);
        assert_eq!(built.completed_date_string(), "2024-05-09");
        assert_eq!(built.story_points(), StoryPoints::Estimated(3));
        assert_eq!(built.epic_name(), Some("Epic"));
    }

    #[test]
    fn test_missing_date_renders_empty() {
        let built = ReleaseNote::from_story(&story(1), "n".to_string(), Priority::P0, None);
        assert_eq!(built.completed_date_string(), "");
        assert_eq!(built.story_points(), StoryPoints::Unestimated);
        assert_eq!(built.epic_group(), None);
    }

    #[test]
    fn test_permalink() {
        let n = note(7, None);
        assert_eq!(
            n.permalink("https://app.shortcut.com/acme/story/"),
            "https://app.shortcut.com/acme/story/7"
        );
    }

    #[test]
    fn test_sort_by_epic_name() {
        let notes = vec![
            note(1, Some("Zeta")),
            note(2, Some("")),
            note(3, Some("Alpha")),
            note(4, None),
            note(5, Some("Alpha")),
        ];
        let sorted = sort_by_epic_name(&notes);
        assert_eq!(ids(&sorted), vec![3, 5, 1, 2, 4]);
        // Input untouched
        assert_eq!(ids(&notes), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_sort_by_priority() {
        let make = |id, priority| {
            ReleaseNote::new(String::new(), priority, None, StoryPoints::Unestimated, None, id)
        };
        let notes = vec![
            make(1, Priority::NotApplicable),
            make(2, Priority::P1),
            make(3, Priority::P0Half),
            make(4, Priority::P0),
            make(5, Priority::P1),
        ];
        assert_eq!(ids(&sort_by_priority(&notes)), vec![4, 3, 2, 5, 1]);
    }

    #[test]
    fn test_sort_by_story_points() {
        let make = |id, points| {
            ReleaseNote::new(String::new(), Priority::P0, None, points, None, id)
        };
        let notes = vec![
            make(1, StoryPoints::Estimated(3)),
            make(2, StoryPoints::Unestimated),
            make(3, StoryPoints::Estimated(8)),
        ];
        assert_eq!(ids(&sort_by_story_points(&notes)), vec![3, 1, 2]);
    }

    #[test]
    fn test_sort_by_completed_date() {
        let make = |id, date: &str| {
            ReleaseNote::new(
                String::new(),
                Priority::P0,
                NaiveDate::parse_from_str(date, "%Y-%m-%d").ok(),
                StoryPoints::Unestimated,
                None,
                id,
            )
        };
        let notes = vec![make(1, "2024-05-10"), make(2, "2024-05-08"), make(3, "2024-05-09")];
        assert_eq!(ids(&sort_by_completed_date(&notes)), vec![2, 3, 1]);
    }
}
