//! Frame and icon records.

use serde::Serialize;

use super::localized::{EventRef, NetOpenRef, ReleaseTagRef};

/// A cosmetic item record, shared by `Frame.xml` and `Icon.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationRecord<K> {
    #[serde(flatten)]
    pub item: K,
    pub release_tag: ReleaseTagRef,
    pub net_open: NetOpenRef,
    pub event: EventRef,
    pub genre_id: i64,
    pub is_disabled: bool,
    pub is_default: bool,
    pub is_effect: bool,
    pub display_condition: Option<String>,
    pub display_text: Option<String>,
}
