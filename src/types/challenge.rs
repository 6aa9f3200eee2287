use serde::Serialize;

use super::localized::{ChallengeRef, EventRef, MusicRef};

/// A `Challenge.xml` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRecord {
    #[serde(flatten)]
    pub challenge: ChallengeRef,
    pub music: MusicRef,
    pub event: EventRef,
    pub relax_data: Vec<ChallengeRelax>,
}

/// One relaxation tier: after `pass_days` days the life limit and
/// unlocked difficulty change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRelax {
    pub pass_days: i64,
    pub life_limit: i64,
    pub difficult: i64,
}
