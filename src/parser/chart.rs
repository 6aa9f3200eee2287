//! Chart metadata reader.
//!
//! Chart files carry whitespace-delimited `T_NUM_*` counters summarising
//! their notes. Only those five counters are read; the note data itself is
//! ignored.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::types::NoteCounts;

static TAP: LazyLock<Regex> = LazyLock::new(|| counter_regex("T_NUM_TAP"));
static BREAK: LazyLock<Regex> = LazyLock::new(|| counter_regex("T_NUM_BRK"));
static HOLD: LazyLock<Regex> = LazyLock::new(|| counter_regex("T_NUM_HLD"));
static SLIDE: LazyLock<Regex> = LazyLock::new(|| counter_regex("T_NUM_SLD"));
static ALL: LazyLock<Regex> = LazyLock::new(|| counter_regex("T_NUM_ALL"));

fn counter_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"{}\s+(\d+)", tag)).unwrap()
}

/// Read the note counters of a chart file.
///
/// Returns `Ok(None)` when the file does not exist. Counters missing from an
/// existing file are zero; counters that do not fit a `u64` are an
/// `InvalidData` error.
pub fn read_chart(path: &Path) -> io::Result<Option<NoteCounts>> {
    // an empty <path> resolves to the entry directory itself
    if path.is_dir() {
        debug!("chart path {} is a directory, using zero counts", path.display());
        return Ok(None);
    }

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("chart {} not found, using zero counts", path.display());
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let counts = parse_chart(&String::from_utf8_lossy(&bytes))?;
    debug!("chart {}: {:?}", path.display(), counts);
    Ok(Some(counts))
}

/// Extract the note counters from chart text.
pub fn parse_chart(source: &str) -> io::Result<NoteCounts> {
    Ok(NoteCounts {
        tap: first_counter(&TAP, source)?,
        brk: first_counter(&BREAK, source)?,
        hold: first_counter(&HOLD, source)?,
        slide: first_counter(&SLIDE, source)?,
        all: first_counter(&ALL, source)?,
    })
}

fn first_counter(pattern: &Regex, source: &str) -> io::Result<u64> {
    let Some(caps) = pattern.captures(source) else {
        return Ok(0);
    };

    caps[1].parse::<u64>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("counter {:?}: {}", &caps[0], e),
        )
    })
}
