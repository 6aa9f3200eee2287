//! Character parser.

use std::path::Path;

use crate::error::DocumentError;
use crate::types::CharaRecord;

use super::document::Element;

/// Parse a `CharaData` document.
pub fn parse_chara(root: &Element, _dir: &Path) -> Result<CharaRecord, DocumentError> {
    Ok(CharaRecord {
        chara: root.reference("name")?,
        color: root.reference("color")?,
        area_id: root.child("genre")?.int("id")?,
        is_disabled: root.flag("disable")?,
    })
}
