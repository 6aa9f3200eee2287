//! Genre parser for `CharaGenre.xml` and `CollectionGenre.xml`.
//!
//! Both categories share one schema and differ only in the keys of the
//! record's own id/name pair.

use std::path::Path;

use crate::error::DocumentError;
use crate::types::{CharaGenreRef, CollectionGenreRef, GenreRecord, LocalizedId};

use super::document::Element;

/// Parse a `CharaGenreData` document.
pub fn parse_chara_genre(
    root: &Element,
    _dir: &Path,
) -> Result<GenreRecord<CharaGenreRef>, DocumentError> {
    parse_genre(root)
}

/// Parse a `CollectionGenreData` document.
pub fn parse_collection_genre(
    root: &Element,
    _dir: &Path,
) -> Result<GenreRecord<CollectionGenreRef>, DocumentError> {
    parse_genre(root)
}

fn parse_genre<K: From<LocalizedId>>(root: &Element) -> Result<GenreRecord<K>, DocumentError> {
    Ok(GenreRecord {
        genre: root.reference("name")?,
        localized_name: root.string("genreName")?,
        color: root.colour("Color")?,
        file_name: root.string("FileName")?,
        is_disabled: root.flag("disable")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_xml;
    use serde_json::json;

    const GENRE: &str = r#"<CollectionGenreData>
  <dataName>collectionGenre000003</dataName>
  <name><id>3</id><str>ゲキチュウマイ</str></name>
  <genreName>音击中二舞萌</genreName>
  <Color><R>255</R><G>0</G><B>128</B></Color>
  <FileName>UI_CMN_CollectionGenre_03</FileName>
  <disable>true</disable>
</CollectionGenreData>"#;

    #[test]
    fn test_parse_collection_genre() {
        let root = parse_xml(GENRE).unwrap();
        let record = parse_collection_genre(&root, Path::new(".")).unwrap();

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "collectionGenreId": 3,
                "collectionGenreName": "ゲキチュウマイ",
                "localizedName": "音击中二舞萌",
                "color": "#FF0080",
                "fileName": "UI_CMN_CollectionGenre_03",
                "isDisabled": true
            })
        );
    }

    #[test]
    fn test_chara_genre_uses_own_keys() {
        let root = parse_xml(GENRE).unwrap();
        let record = parse_chara_genre(&root, Path::new(".")).unwrap();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["charaGenreId"], 3);
        assert!(value.get("collectionGenreId").is_none());
    }

    #[test]
    fn test_missing_color_component() {
        let root = parse_xml(
            "<CharaGenreData><name><id>1</id><str>a</str></name><genreName>a</genreName>\
             <Color><R>1</R><G>2</G></Color><FileName>f</FileName><disable>false</disable>\
             </CharaGenreData>",
        )
        .unwrap();
        assert_eq!(
            parse_chara_genre(&root, Path::new(".")).unwrap_err(),
            DocumentError::MissingElement("Color/B".to_string())
        );
    }
}
