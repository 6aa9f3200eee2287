use std::path::Path;

use crate::error::DocumentError;
use crate::types::MapColorRecord;

use super::document::Element;

/// Parse a `MapColorData` document.
pub fn parse_map_color(root: &Element, _dir: &Path) -> Result<MapColorRecord, DocumentError> {
    Ok(MapColorRecord {
        map_color: root.reference("name")?,
        color_group: root.reference("ColorGroupId")?,
        color: root.colour("Color")?,
        color_dark: root.colour("ColorDark")?,
    })
}
