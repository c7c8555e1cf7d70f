//! CSV export of generated teams.
//!
//! One row per team: `"Team N"` followed by the members. Every cell is
//! quoted and embedded quotes are doubled. Rows have as many cells as the
//! team has members, so the writer runs in flexible mode.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use types::Team;

use crate::error::Result;

/// Render teams as CSV text (rows separated by `\n`, no trailing newline).
pub fn teams_to_csv(teams: &[Team]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for (i, team) in teams.iter().enumerate() {
        let label = format!("Team {}", i + 1);
        writer.write_record(std::iter::once(label).chain(team.iter().cloned()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
