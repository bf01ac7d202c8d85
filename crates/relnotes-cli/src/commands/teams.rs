use anyhow::{Context, Result};
use relnotes_integrations::{Group, StoryTracker};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Team")]
    name: String,
}

/// Print Shortcut groups as a table, for filling in `[teams.valid]`
///
/// # Errors
///
/// Returns an error if the group listing cannot be fetched
pub async fn handle_teams_command(tracker: &dyn StoryTracker) -> Result<()> {
    let groups = tracker
        .list_groups()
        .await
        .context("Failed to fetch teams")?;

    if groups.is_empty() {
        println!("No teams found.");
        return Ok(());
    }

    println!("{}", teams_table(groups));
    Ok(())
}

fn teams_table(groups: Vec<Group>) -> Table {
    let mut rows: Vec<TeamRow> = groups
        .into_iter()
        .map(|g| TeamRow {
            id: g.id,
            name: g.name,
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Table::new(rows)
}
