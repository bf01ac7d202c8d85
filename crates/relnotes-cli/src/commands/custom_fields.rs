//! List custom field definitions so the priority field and its value ids can
//! be copied into the `[priority]` config section.

use anyhow::{Context, Result};
use relnotes_integrations::{CustomField, StoryTracker};

/// Print every custom field with its values
///
/// # Errors
///
/// Returns an error if the custom field listing cannot be fetched
pub async fn handle_custom_fields_command(tracker: &dyn StoryTracker) -> Result<()> {
    let fields = tracker
        .list_custom_fields()
        .await
        .context("Failed to fetch custom fields")?;

    print!("{}", format_custom_fields(&fields));
    Ok(())
}

fn format_custom_fields(fields: &[CustomField]) -> String {
    let mut output = String::from("\nCustom fields:\n");
    for field in fields {
        output.push_str(&format!("Field Name: {} - Field ID: {}\n", field.name, field.id));
        for value in &field.values {
            output.push_str(&format!("  Value: {} - Value ID: {}\n", value.value, value.id));
        }
        output.push_str(&"-".repeat(40));
        output.push('\n');
    }
    output
}
