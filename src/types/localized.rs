//! Localized id references.
//!
//! Every cross-entity reference in an opt package is an element with an
//! `<id>` and a `<str>` child. The pair is read once into a [`LocalizedId`]
//! and converted into a named reference type whose JSON keys carry the
//! referenced entity's name (e.g. `musicId` / `musicName`).

/// An `(id, str)` pair read from a reference element.
///
/// `name` is `None` when `<str>` has no text, and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedId {
    pub id: i64,
    pub name: Option<String>,
}

impl LocalizedId {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    /// A reference whose `<str>` is empty.
    pub fn unnamed(id: i64) -> Self {
        Self { id, name: None }
    }
}

macro_rules! localized_ref {
    ($(#[$meta:meta])* $name:ident, $id_key:literal, $name_key:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
        pub struct $name {
            #[serde(rename = $id_key)]
            pub id: i64,
            #[serde(rename = $name_key)]
            pub name: Option<String>,
        }

        impl From<LocalizedId> for $name {
            fn from(value: LocalizedId) -> Self {
                Self {
                    id: value.id,
                    name: value.name,
                }
            }
        }
    };
}

localized_ref!(ArtistRef, "artistId", "artistName");
localized_ref!(BonusMusicRef, "bonusMusicId", "bonusMusicName");
localized_ref!(ChallengeRef, "challengeId", "challengeName");
localized_ref!(CharaGenreRef, "charaGenreId", "charaGenreName");
localized_ref!(
    /// Used both for chara records and character rewards.
    CharaRef,
    "charaId",
    "charaName"
);
localized_ref!(CollectionGenreRef, "collectionGenreId", "collectionGenreName");
localized_ref!(ColorGroupRef, "colorGroupId", "colorGroupName");
localized_ref!(ColorRef, "colorId", "colorName");
localized_ref!(CourseModeRef, "modeId", "modeName");
localized_ref!(CourseRef, "courseId", "courseName");
localized_ref!(DaniRef, "daniId", "daniName");
localized_ref!(DesignerRef, "designerId", "designerName");
localized_ref!(DifficultyRef, "difficultyId", "difficultyName");
localized_ref!(EventRef, "eventId", "eventName");
localized_ref!(FrameRef, "frameId", "frameName");
localized_ref!(GenreRef, "genreId", "genreName");
localized_ref!(IconRef, "iconId", "iconName");
localized_ref!(IslandRef, "islandId", "islandName");
localized_ref!(LoginBonusRef, "loginBonusId", "loginBonusName");
localized_ref!(MapBonusMusicRef, "mapBonusMusicId", "mapBonusMusicName");
localized_ref!(MapColorRef, "mapColorId", "mapColorName");
localized_ref!(MapRef, "mapId", "mapName");
localized_ref!(MapTreasureRef, "mapTreasureId", "mapTreasureName");
localized_ref!(MusicRef, "musicId", "musicName");
localized_ref!(NetOpenRef, "netOpenId", "netOpenName");
localized_ref!(PartnerRef, "partnerId", "partnerName");
localized_ref!(PlateRef, "plateId", "plateName");
localized_ref!(ReleaseTagRef, "releaseTagId", "releaseTagName");
localized_ref!(TicketRef, "ticketId", "ticketName");
localized_ref!(TitleRef, "titleId", "titleName");
localized_ref!(TreasureRef, "treasureId", "treasureName");
