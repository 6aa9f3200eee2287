//! Map records: maps, bonus music lists, map colours and treasures.

use serde::Serialize;

use super::colour::Colour;
use super::localized::{
    BonusMusicRef, CharaRef, ColorGroupRef, ColorRef, EventRef, FrameRef, IconRef, IslandRef,
    MapBonusMusicRef, MapColorRef, MapRef, MapTreasureRef, MusicRef, PlateRef, TitleRef,
    TreasureRef,
};

/// A `Map.xml` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRecord {
    #[serde(flatten)]
    pub map: MapRef,
    pub island: IslandRef,
    pub color: ColorRef,
    pub bonus_music: BonusMusicRef,
    pub event: EventRef,
    pub magnification: i64,
    pub is_collabo: bool,
    pub is_infinity: bool,
    pub treasures: Vec<TreasureSlot>,
}

/// A treasure placed along a map at `distance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreasureSlot {
    pub distance: i64,
    pub flag: Option<String>,
    pub sub_param1: i64,
    pub sub_param2: i64,
    pub treasure: TreasureRef,
}

/// A `MapBonusMusic.xml` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapBonusMusicRecord {
    #[serde(flatten)]
    pub bonus_music: MapBonusMusicRef,
    pub musics: Vec<MusicRef>,
}

/// A `MapColor.xml` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapColorRecord {
    #[serde(flatten)]
    pub map_color: MapColorRef,
    pub color_group: ColorGroupRef,
    pub color: Colour,
    pub color_dark: Colour,
}

/// A `MapTreasure.xml` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapTreasureRecord {
    #[serde(flatten)]
    pub treasure: MapTreasureRef,
    pub treasure_type: Option<String>,
    pub detail: TreasureDetail,
}

/// What a treasure contains; which slot matters depends on the treasure type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreasureDetail {
    pub character: CharaRef,
    pub music: MusicRef,
    pub plate: PlateRef,
    pub frame: FrameRef,
    pub title: TitleRef,
    pub icon: IconRef,
    pub value: i64,
}
