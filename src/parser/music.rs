//! Music parser.
//!
//! Parses `Music.xml` documents. Each `<Notes>` slot with a nonzero level
//! becomes a chart entry whose note counts come from the chart file named in
//! `<file><path>`, resolved against the document's own directory.

use std::path::Path;

use tracing::debug;

use crate::error::DocumentError;
use crate::types::{ChartEntry, MusicRecord};

use super::chart::read_chart;
use super::document::Element;

/// Parse a `MusicData` document located in `dir`.
pub fn parse_music(root: &Element, dir: &Path) -> Result<MusicRecord, DocumentError> {
    let mut notes = Vec::new();
    for (slot, entry) in root.items("notesData", "Notes")?.into_iter().enumerate() {
        if let Some(chart) = parse_notes(entry, slot, dir)? {
            notes.push(chart);
        }
    }

    Ok(MusicRecord {
        music: root.reference("name")?,
        sort_name: root.string("sortName")?,
        artist: root.reference("artistName")?,
        genre: root.reference("genreName")?,
        bpm: root.float("bpm")?,
        version: root.string("version")?,
        lock_type: root.int("lockType")?,
        sub_lock_type: root.int("subLockType")?,
        event: root.reference("eventName")?,
        notes,
    })
}

/// Parse one difficulty slot. A level of zero means the slot has no chart.
fn parse_notes(
    entry: &Element,
    slot: usize,
    dir: &Path,
) -> Result<Option<ChartEntry>, DocumentError> {
    let level = entry.int("level")?;
    if level == 0 {
        return Ok(None);
    }

    let chart_path = dir.join(entry.child("file")?.text_of("path")?);
    let note_count = read_chart(&chart_path)
        .map_err(|e| DocumentError::Chart {
            path: chart_path.clone(),
            message: e.to_string(),
        })?
        .unwrap_or_default();
    debug!("slot {} -> {}", slot, chart_path.display());

    Ok(Some(ChartEntry {
        difficulty: slot,
        level: ChartEntry::decimal_level(level, entry.int("levelDecimal")?),
        designer: entry.reference("notesDesigner")?,
        notes_type: entry.int("notesType")?,
        is_enable: entry.flag("isEnable")?,
        note_count,
    }))
}
