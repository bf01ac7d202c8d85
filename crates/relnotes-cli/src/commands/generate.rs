//! Release notes generation
//!
//! Usage:
//! ```bash
//! relnotes > release-notes.txt
//! ```

use anyhow::{Context, Result};
use indicatif::MultiProgress;
use relnotes_ai::AiSummarizer;
use relnotes_core::{Config, ReleaseNotesPipeline, RunOutcome};
use relnotes_integrations::StoryTracker;

use super::progress::BarProgress;

/// Run the pipeline for today's window and print the digest to stdout
///
/// The progress bar joins `bars`, the set the logger suspends while writing.
///
/// # Errors
///
/// Returns an error if the tracker cannot be read or a summary fails under
/// the abort policy
pub async fn handle_generate_command(
    config: &Config,
    tracker: &dyn StoryTracker,
    bars: &MultiProgress,
) -> Result<()> {
    let summarizer = AiSummarizer::new(&config.ai).context("Failed to create summarizer")?;
    log::debug!("Summarizing with {}", summarizer.model_name());

    let progress = BarProgress::new(bars);
    let today = chrono::Local::now().date_naive();

    let outcome = ReleaseNotesPipeline::new(config, tracker, &summarizer)
        .with_progress(&progress)
        .run(today)
        .await
        .context("Failed to generate release notes")?;

    match outcome {
        RunOutcome::NoStories => println!("No stories found."),
        RunOutcome::Digest(digest) => {
            if !digest.skipped.is_empty() {
                log::warn!(
                    "{} stories were left out because their summary failed",
                    digest.skipped.len()
                );
            }
            print!("{}", digest.render(&config.shortcut.permalink_base));
        }
    }

    Ok(())
}
