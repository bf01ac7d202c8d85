//! Priority labels and the custom-field based classifier

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use relnotes_integrations::RawStory;
use serde::{Deserialize, Serialize};

use crate::config::PriorityConfig;

/// Release-note priority label
///
/// Variants are declared in rank order, so the derived `Ord` is the
/// P0 < P0.5 < P1 < P2 < P3 < N/A total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum Priority {
    #[serde(rename = "P0")]
    P0,
    #[serde(rename = "P0.5")]
    P0Half,
    #[serde(rename = "P1")]
    P1,
    #[serde(rename = "P2")]
    P2,
    #[serde(rename = "P3")]
    P3,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Priority {
    pub const ALL: [Self; 6] = [
        Self::P0,
        Self::P0Half,
        Self::P1,
        Self::P2,
        Self::P3,
        Self::NotApplicable,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::P0 => "P0",
            Self::P0Half => "P0.5",
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3",
            Self::NotApplicable => "N/A",
        }
    }

    /// 1-based rank, lower is more urgent
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::P0 => 1,
            Self::P0Half => 2,
            Self::P1 => 3,
            Self::P2 => 4,
            Self::P3 => 5,
            Self::NotApplicable => 6,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| format!("Unknown priority label: {s}"))
    }
}

/// Outcome of classifying one story
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityDecision {
    pub priority: Priority,
    /// Whether the story may appear in the release notes
    pub include: bool,
}

impl PriorityDecision {
    /// Decision for stories without a mapped priority value
    pub const UNMAPPED: Self = Self {
        priority: Priority::NotApplicable,
        include: false,
    };
}

/// Maps a story's priority custom field to a [`PriorityDecision`]
///
/// The value-id table comes from configuration; nothing here is hardwired.
#[derive(Debug, Clone)]
pub struct PriorityClassifier {
    field_id: String,
    table: HashMap<String, PriorityDecision>,
}

impl PriorityClassifier {
    #[must_use]
    pub fn new(config: &PriorityConfig) -> Self {
        let table = config
            .values
            .iter()
            .map(|(value_id, rule)| {
                (
                    value_id.clone(),
                    PriorityDecision {
                        priority: rule.label,
                        include: rule.include,
                    },
                )
            })
            .collect();

        Self {
            field_id: config.field_id.clone(),
            table,
        }
    }

    /// Classify a story by its priority custom field
    #[must_use]
    pub fn classify(&self, story: &RawStory) -> PriorityDecision {
        story
            .custom_field(&self.field_id)
            .and_then(|field| self.table.get(&field.value_id))
            .copied()
            .unwrap_or(PriorityDecision::UNMAPPED)
    }
}
