pub mod error;
pub mod http;
pub mod shortcut;
pub mod traits;

pub use error::TrackerError;
pub use shortcut::{
    rebase_next_path, CustomField, CustomFieldEnumValue, CustomFieldValue, Epic, Group, RawStory,
    ShortcutClient, StorySearchPage,
};
pub use traits::StoryTracker;
