//! Data categories of an opt package.
//!
//! Each category lives in a fixed subdirectory of the package root and is
//! described by one XML file per entry, e.g. `music/music000011/Music.xml`.

use std::fmt;
use std::str::FromStr;

use crate::error::OptxError;

/// The kind of data a category directory holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Challenge,
    Chara,
    CharaGenre,
    CollectionGenre,
    Course,
    Event,
    Frame,
    Icon,
    LoginBonus,
    Map,
    MapBonusMusic,
    MapColor,
    MapTreasure,
    Music,
}

impl Category {
    /// Every category, in extraction order.
    pub const ALL: [Category; 14] = [
        Category::Challenge,
        Category::Chara,
        Category::CharaGenre,
        Category::CollectionGenre,
        Category::Course,
        Category::Event,
        Category::Frame,
        Category::Icon,
        Category::LoginBonus,
        Category::Map,
        Category::MapBonusMusic,
        Category::MapColor,
        Category::MapTreasure,
        Category::Music,
    ];

    /// Subdirectory name under the package root. Also used as the label in
    /// output file names.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Challenge => "challenge",
            Category::Chara => "chara",
            Category::CharaGenre => "charaGenre",
            Category::CollectionGenre => "collectionGenre",
            Category::Course => "course",
            Category::Event => "event",
            Category::Frame => "frame",
            Category::Icon => "icon",
            Category::LoginBonus => "loginBonus",
            Category::Map => "map",
            Category::MapBonusMusic => "mapBonusMusic",
            Category::MapColor => "mapColor",
            Category::MapTreasure => "mapTreasure",
            Category::Music => "music",
        }
    }

    /// Name of the XML document describing each entry.
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Challenge => "Challenge.xml",
            Category::Chara => "Chara.xml",
            Category::CharaGenre => "CharaGenre.xml",
            Category::CollectionGenre => "CollectionGenre.xml",
            Category::Course => "Course.xml",
            Category::Event => "Event.xml",
            Category::Frame => "Frame.xml",
            Category::Icon => "Icon.xml",
            Category::LoginBonus => "LoginBonus.xml",
            Category::Map => "Map.xml",
            Category::MapBonusMusic => "MapBonusMusic.xml",
            Category::MapColor => "MapColor.xml",
            Category::MapTreasure => "MapTreasure.xml",
            Category::Music => "Music.xml",
        }
    }

    /// Entry directories that are never scanned for this category.
    pub fn excluded_dirs(&self) -> &'static [&'static str] {
        match self {
            Category::Music => &["music000000", "music000001"],
            _ => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

impl FromStr for Category {
    type Err = OptxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.dir_name() == s)
            .ok_or_else(|| OptxError::Usage {
                message: format!("Unknown category: {}", s),
                help: Some(format!("Valid categories: {}", valid_labels())),
            })
    }
}

fn valid_labels() -> String {
    Category::ALL
        .iter()
        .map(|c| c.dir_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.dir_name().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Category::LoginBonus.file_name(), "LoginBonus.xml");
        assert_eq!(Category::MapBonusMusic.dir_name(), "mapBonusMusic");
        assert_eq!(Category::CharaGenre.to_string(), "charaGenre");
    }

    #[test]
    fn test_only_music_excludes_dirs() {
        assert_eq!(
            Category::Music.excluded_dirs(),
            &["music000000", "music000001"]
        );
        assert!(Category::ALL
            .iter()
            .filter(|c| **c != Category::Music)
            .all(|c| c.excluded_dirs().is_empty()));
    }

    #[test]
    fn test_unknown_label() {
        let err = "songs".parse::<Category>().unwrap_err();
        assert!(matches!(err, OptxError::Usage { .. }));
        assert!(err.to_string().contains("songs"));
    }
}
