//! Music records and chart difficulty entries.

use serde::Serialize;

use super::localized::{ArtistRef, DesignerRef, EventRef, GenreRef, MusicRef};

/// A `Music.xml` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicRecord {
    #[serde(flatten)]
    pub music: MusicRef,
    pub sort_name: Option<String>,
    pub artist: ArtistRef,
    pub genre: GenreRef,
    pub bpm: f64,
    pub version: Option<String>,
    pub lock_type: i64,
    pub sub_lock_type: i64,
    pub event: EventRef,
    pub notes: Vec<ChartEntry>,
}

/// One playable difficulty of a track.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry {
    /// Position of the `<Notes>` slot, counting skipped slots.
    pub difficulty: usize,
    pub level: f64,
    pub designer: DesignerRef,
    pub notes_type: i64,
    pub is_enable: bool,
    pub note_count: NoteCounts,
}

impl ChartEntry {
    /// Combine the integer and tenths parts of a level into one decimal.
    pub fn decimal_level(level: i64, level_decimal: i64) -> f64 {
        (level * 10 + level_decimal) as f64 / 10.0
    }
}

/// Note totals read from a chart file's `T_NUM_*` counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NoteCounts {
    pub tap: u64,
    #[serde(rename = "break")]
    pub brk: u64,
    pub hold: u64,
    pub slide: u64,
    pub all: u64,
}
