use std::path::Path;

use crate::error::DocumentError;
use crate::types::EventRecord;

use super::document::Element;

/// Parse an `EventData` document.
pub fn parse_event(root: &Element, _dir: &Path) -> Result<EventRecord, DocumentError> {
    Ok(EventRecord {
        event: root.reference("name")?,
        info_type: root.int("infoType")?,
        always_open: root.flag("alwaysOpen")?,
    })
}
