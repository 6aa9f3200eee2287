//! Map parser.

use std::path::Path;

use crate::error::DocumentError;
use crate::types::{MapRecord, TreasureSlot};

use super::document::Element;

/// Parse a `MapData` document.
pub fn parse_map(root: &Element, _dir: &Path) -> Result<MapRecord, DocumentError> {
    let treasures = root
        .items("TreasureExDatas", "MapTreasureExData")?
        .into_iter()
        .map(parse_treasure_slot)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MapRecord {
        map: root.reference("name")?,
        island: root.reference("IslandId")?,
        color: root.reference("ColorId")?,
        bonus_music: root.reference("BonusMusicId")?,
        event: root.reference("OpenEventId")?,
        magnification: root.int("BonusMusicMagnification")?,
        is_collabo: root.flag("IsCollabo")?,
        is_infinity: root.flag("IsInfinity")?,
        treasures,
    })
}

fn parse_treasure_slot(slot: &Element) -> Result<TreasureSlot, DocumentError> {
    Ok(TreasureSlot {
        distance: slot.int("Distance")?,
        flag: slot.string("Flag")?,
        sub_param1: slot.int("SubParam1")?,
        sub_param2: slot.int("SubParam2")?,
        treasure: slot.reference("TreasureId")?,
    })
}
