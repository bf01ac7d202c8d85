use std::collections::HashMap;

use relnotes_integrations::{Epic, StoryTracker, TrackerError};

/// Epic id to display name lookup, built once per run
#[derive(Debug, Clone, Default)]
pub struct EpicNameIndex {
    names: HashMap<i64, String>,
}

impl EpicNameIndex {
    /// Fetch the full epic listing and index it
    ///
    /// # Errors
    ///
    /// Returns an error if the epic listing cannot be fetched or parsed
    pub async fn load(tracker: &dyn StoryTracker) -> Result<Self, TrackerError> {
        let epics = tracker.list_epics().await?;
        log::debug!("Loaded {} epics from {}", epics.len(), tracker.system_name());
        Ok(Self::from_epics(epics))
    }

    #[must_use]
    pub fn from_epics(epics: impl IntoIterator<Item = Epic>) -> Self {
        Self {
            names: epics.into_iter().map(|e| (e.id, e.name)).collect(),
        }
    }

    /// Display name of an epic; `None` for stories without an epic or with an unknown id
    #[must_use]
    pub fn name(&self, epic_id: Option<i64>) -> Option<&str> {
        epic_id
            .and_then(|id| self.names.get(&id))
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
