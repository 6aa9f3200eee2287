//! Login bonus parser.
//!
//! Every reward slot is required, even for bonus types that only use one.

use std::path::Path;

use crate::error::DocumentError;
use crate::types::{LoginBonusRecord, LoginBonusReward};

use super::document::Element;

/// Parse a `LoginBonusData` document.
pub fn parse_login_bonus(root: &Element, _dir: &Path) -> Result<LoginBonusRecord, DocumentError> {
    Ok(LoginBonusRecord {
        login_bonus: root.reference("name")?,
        item_id: root.int("ItemID")?,
        event: root.reference("OpenEventId")?,
        bonus_type: root.string("BonusType")?,
        reward: LoginBonusReward {
            partner: root.reference("PartnerId")?,
            character: root.reference("CharacterId")?,
            music: root.reference("MusicId")?,
            title: root.reference("TitleId")?,
            plate: root.reference("PlateId")?,
            icon: root.reference("IconId")?,
            frame: root.reference("FrameId")?,
            ticket: root.reference("TicketId")?,
        },
        max_point: root.int("MaxPoint")?,
        is_repeat: root.flag("IsRepeat")?,
        is_collabo: root.flag("IsCollabo")?,
    })
}
