use std::path::Path;

use crate::error::DocumentError;
use crate::types::{MapBonusMusicRecord, MusicRef};

use super::document::Element;

/// Parse a `MapBonusMusicData` document.
pub fn parse_map_bonus_music(
    root: &Element,
    _dir: &Path,
) -> Result<MapBonusMusicRecord, DocumentError> {
    let musics = root
        .child("MusicIds")?
        .items("list", "StringID")?
        .into_iter()
        .map(|music| music.as_localized().map(MusicRef::from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MapBonusMusicRecord {
        bonus_music: root.reference("name")?,
        musics,
    })
}
