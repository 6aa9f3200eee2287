//! Challenge parser.
//!
//! Parses `Challenge.xml` documents into `ChallengeRecord` instances.

use std::path::Path;

use crate::error::DocumentError;
use crate::types::{ChallengeRecord, ChallengeRelax};

use super::document::Element;

/// Parse a `ChallengeData` document.
pub fn parse_challenge(root: &Element, _dir: &Path) -> Result<ChallengeRecord, DocumentError> {
    let relax_data = root
        .items("Relax", "ChallengeRelax")?
        .into_iter()
        .map(parse_relax)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ChallengeRecord {
        challenge: root.reference("name")?,
        music: root.reference("Music")?,
        event: root.reference("EventName")?,
        relax_data,
    })
}

fn parse_relax(relax: &Element) -> Result<ChallengeRelax, DocumentError> {
    Ok(ChallengeRelax {
        pass_days: relax.int("Day")?,
        life_limit: relax.int("Life")?,
        difficult: relax.child("ReleaseDiff")?.int("id")?,
    })
}
