use serde::Serialize;

use super::localized::EventRef;

/// An `Event.xml` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(flatten)]
    pub event: EventRef,
    pub info_type: i64,
    pub always_open: bool,
}
