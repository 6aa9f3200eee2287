use std::path::Path;

use crate::error::DocumentError;
use crate::types::{MapTreasureRecord, TreasureDetail};

use super::document::Element;

/// Parse a `MapTreasureData` document.
pub fn parse_map_treasure(root: &Element, _dir: &Path) -> Result<MapTreasureRecord, DocumentError> {
    Ok(MapTreasureRecord {
        treasure: root.reference("name")?,
        treasure_type: root.string("TreasureType")?,
        detail: TreasureDetail {
            character: root.reference("CharacterId")?,
            music: root.reference("MusicId")?,
            plate: root.reference("NamePlate")?,
            frame: root.reference("Frame")?,
            title: root.reference("Title")?,
            icon: root.reference("Icon")?,
            value: root.int("Value")?,
        },
    })
}
