use std::collections::HashSet;

use crate::config::TeamConfig;

/// Decides whether a story's group (team) qualifies for the release notes
#[derive(Debug, Clone)]
pub struct GroupFilter {
    enabled: bool,
    valid_groups: HashSet<String>,
}

impl GroupFilter {
    #[must_use]
    pub fn new(config: &TeamConfig) -> Self {
        Self {
            enabled: config.enabled,
            valid_groups: config.valid.keys().cloned().collect(),
        }
    }

    /// With team filtering disabled every story is eligible, including ones
    /// without a group. Otherwise the group must be configured as valid.
    #[must_use]
    pub fn is_eligible(&self, group_id: Option<&str>) -> bool {
        if !self.enabled {
            return true;
        }
        group_id.is_some_and(|id| self.valid_groups.contains(id))
    }
}
