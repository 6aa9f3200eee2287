use serde::Serialize;

use super::localized::{
    CharaRef, EventRef, FrameRef, IconRef, LoginBonusRef, MusicRef, PartnerRef, PlateRef,
    TicketRef, TitleRef,
};

/// A `LoginBonus.xml` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginBonusRecord {
    #[serde(flatten)]
    pub login_bonus: LoginBonusRef,
    pub item_id: i64,
    pub event: EventRef,
    pub bonus_type: Option<String>,
    pub reward: LoginBonusReward,
    pub max_point: i64,
    pub is_repeat: bool,
    pub is_collabo: bool,
}

/// Every reward slot a login bonus can hand out. Unused slots still carry
/// their placeholder reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginBonusReward {
    pub partner: PartnerRef,
    pub character: CharaRef,
    pub music: MusicRef,
    pub title: TitleRef,
    pub plate: PlateRef,
    pub icon: IconRef,
    pub frame: FrameRef,
    pub ticket: TicketRef,
}
