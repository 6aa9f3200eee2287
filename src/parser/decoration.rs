//! Frame and icon parser.
//!
//! `Frame.xml` and `Icon.xml` share one schema; only the keys of the
//! record's own id/name pair differ.

use std::path::Path;

use crate::error::DocumentError;
use crate::types::{DecorationRecord, FrameRef, IconRef, LocalizedId};

use super::document::Element;

/// Parse a `FrameData` document.
pub fn parse_frame(
    root: &Element,
    _dir: &Path,
) -> Result<DecorationRecord<FrameRef>, DocumentError> {
    parse_decoration(root)
}

/// Parse an `IconData` document.
pub fn parse_icon(
    root: &Element,
    _dir: &Path,
) -> Result<DecorationRecord<IconRef>, DocumentError> {
    parse_decoration(root)
}

fn parse_decoration<K: From<LocalizedId>>(
    root: &Element,
) -> Result<DecorationRecord<K>, DocumentError> {
    Ok(DecorationRecord {
        item: root.reference("name")?,
        release_tag: root.reference("releaseTagName")?,
        net_open: root.reference("netOpenName")?,
        event: root.reference("eventName")?,
        genre_id: root.child("genre")?.int("id")?,
        is_disabled: root.flag("disable")?,
        is_default: root.flag("isDefault")?,
        is_effect: root.flag("isEffect")?,
        display_condition: root.string("dispCond")?,
        display_text: root.string("normText")?,
    })
}
