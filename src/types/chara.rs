//! Character and genre records.

use serde::Serialize;

use super::colour::Colour;
use super::localized::{CharaRef, ColorRef};

/// A `Chara.xml` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharaRecord {
    #[serde(flatten)]
    pub chara: CharaRef,
    #[serde(flatten)]
    pub color: ColorRef,
    pub area_id: i64,
    pub is_disabled: bool,
}

/// A genre record, shared by `CharaGenre.xml` and `CollectionGenre.xml`.
///
/// `K` is the record's own reference type, which decides the id/name keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreRecord<K> {
    #[serde(flatten)]
    pub genre: K,
    pub localized_name: Option<String>,
    pub color: Colour,
    pub file_name: Option<String>,
    pub is_disabled: bool,
}
