//! Record types emitted for each category.
//!
//! - `Colour` - RGB colours rendered as `#RRGGBB`
//! - `LocalizedId` and the named reference types built from it
//! - one record struct per category

mod challenge;
mod chara;
mod colour;
mod course;
mod decoration;
mod event;
mod flag;
mod localized;
mod login_bonus;
mod map;
mod music;

pub use challenge::{ChallengeRecord, ChallengeRelax};
pub use chara::{CharaRecord, GenreRecord};
pub use colour::{rgb_to_hex, Colour};
pub use course::{CourseDamage, CourseMusic, CourseRecord};
pub use decoration::DecorationRecord;
pub use event::EventRecord;
pub use flag::parse_flag;
pub use localized::*;
pub use login_bonus::{LoginBonusRecord, LoginBonusReward};
pub use map::{
    MapBonusMusicRecord, MapColorRecord, MapRecord, MapTreasureRecord, TreasureDetail,
    TreasureSlot,
};
pub use music::{ChartEntry, MusicRecord, NoteCounts};
