//! Message-board digest rendering
//!
//! Output uses Slack-style markup: `*bold*`, bullet dashes and emoji tags.

use std::sync::OnceLock;

use regex::Regex;

use crate::priority::Priority;
use crate::release_note::ReleaseNote;

pub const BANNER: &str =
    ":green_alert: :green_alert: Please find below the weekly release notes :green_alert: :green_alert:";

/// Header for notes without an epic
pub const OTHER_EPIC: &str = "Other";

/// `- *<date>*: [*<priority>*] - [<id>](<base>/<id>) - <note>`
#[must_use]
pub fn render_line(note: &ReleaseNote, permalink_base: &str) -> String {
    format!(
        "- *{}*: [*{}*] - [{}]({}) - {}",
        note.completed_date_string(),
        note.priority(),
        note.story_id(),
        note.permalink(permalink_base),
        note.note()
    )
}

fn render_header(epic: Option<&str>) -> String {
    format!("*{}*:", epic.unwrap_or(OTHER_EPIC))
}

/// Render the banner followed by one header per epic group.
///
/// Notes are emitted in the order given; a header is printed whenever the
/// epic group changes, so callers pass notes already sorted by epic.
#[must_use]
pub fn render_digest(notes: &[ReleaseNote], permalink_base: &str) -> String {
    let mut lines = vec![BANNER.to_string()];
    let mut current: Option<Option<&str>> = None;

    for note in notes {
        let group = note.epic_group();
        if current != Some(group) {
            lines.push(render_header(group));
            current = Some(group);
        }
        lines.push(render_line(note, permalink_base));
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Fields recovered from a rendered note line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// `YYYY-MM-DD`, or empty
    pub date: String,
    pub priority: Priority,
    pub story_id: i64,
    pub permalink: String,
    pub note: String,
}

fn line_regex() -> Option<&'static Regex> {
    static LINE_RE: OnceLock<Option<Regex>> = OnceLock::new();
    LINE_RE
        .get_or_init(|| {
            Regex::new(
                r"^- \*(?P<date>[^*]*)\*: \[\*(?P<priority>[^*]+)\*\] - \[(?P<id>-?\d+)\]\((?P<link>[^)]*)\) - (?P<note>.*)$",
            )
            .ok()
        })
        .as_ref()
}

/// Parse a line produced by [`render_line`]; `None` for headers, the banner
/// and anything else
#[must_use]
pub fn parse_rendered_line(line: &str) -> Option<RenderedLine> {
    let caps = line_regex()?.captures(line)?;
    Some(RenderedLine {
        date: caps["date"].to_string(),
        priority: caps["priority"].parse().ok()?,
        story_id: caps["id"].parse().ok()?,
        permalink: caps["link"].to_string(),
        note: caps["note"].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release_note::{sort_by_epic_name, StoryPoints};
    use crate::test_helpers::note;
    use chrono::NaiveDate;

    const BASE: &str = "https://app.shortcut.com/acme/story";

    fn dated(id: i64, priority: Priority, text: &str) -> ReleaseNote {
        ReleaseNote::new(
            text.to_string(),
            priority,
            NaiveDate::from_ymd_opt(2024, 5, 9),
            StoryPoints::Estimated(2),
            Some("Checkout".to_string()),
            id,
        )
    }

    #[test]
    fn test_render_line_format() {
        let line = render_line(&dated(1234, Priority::P0Half, "Checkout no longer times out."), BASE);
        assert_eq!(
            line,
            "- *2024-05-09*: [*P0.5*] - [1234](https://app.shortcut.com/acme/story/1234) - Checkout no longer times out."
        );
    }

    #[test]
    fn test_render_digest_groups() {
        let notes = sort_by_epic_name(&[
            note(1, Some("Zeta")),
            note(2, Some("")),
            note(3, Some("Alpha")),
            note(4, None),
            note(5, Some("Alpha")),
        ]);
        let output = render_digest(&notes, BASE);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], BANNER);
        let headers: Vec<&str> = lines
            .iter()
            .copied()
            .filter(|l| l.starts_with('*'))
            .collect();
        assert_eq!(headers, vec!["*Alpha*:", "*Zeta*:", "*Other*:"]);
        assert_eq!(lines.len(), 1 + 3 + 5);
        // "" and missing epics share one Other group
        assert!(lines[7].contains("[2]"));
        assert!(lines[8].contains("[4]"));
    }

    #[test]
    fn test_render_digest_empty() {
        assert_eq!(render_digest(&[], BASE), format!("{BANNER}\n"));
    }

    #[test]
    fn test_multiline_note_renders_as_one_line() {
        let multiline = dated(12, Priority::P1, "line one\nline two");
        let line = render_line(&multiline, BASE);
        assert!(!line.contains('\n'));

        let parsed = parse_rendered_line(&line).unwrap();
        assert_eq!(parsed.note, "line one line two");
        assert_eq!(parsed.story_id, 12);
    }

    #[test]
    fn test_rendered_line_roundtrip() {
        let rendered = dated(98, Priority::NotApplicable, "Search results - now 2x faster (beta).");
        let parsed = parse_rendered_line(&render_line(&rendered, BASE)).unwrap();

        assert_eq!(parsed.date, rendered.completed_date_string());
        assert_eq!(parsed.priority, rendered.priority());
        assert_eq!(parsed.story_id, rendered.story_id());
        assert_eq!(parsed.permalink, rendered.permalink(BASE));
        assert_eq!(parsed.note, rendered.note());
    }

    #[test]
    fn test_parse_rejects_other_lines() {
        assert!(parse_rendered_line(BANNER).is_none());
        assert!(parse_rendered_line("*Other*:").is_none());
        assert!(parse_rendered_line("- *2024-05-09*: [*P7*] - [1](x) - n").is_none());
    }
}
