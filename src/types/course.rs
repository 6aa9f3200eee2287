//! Course records.

use serde::Serialize;

use super::localized::{CourseModeRef, CourseRef, DaniRef, DifficultyRef, EventRef, MusicRef};

/// A `Course.xml` record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    #[serde(flatten)]
    pub course: CourseRef,
    pub course_mode: CourseModeRef,
    pub base_dani: DaniRef,
    pub base_course: CourseRef,
    pub event: EventRef,
    pub is_random: bool,
    pub upper_level: i64,
    pub lower_level: i64,
    pub is_lock: bool,
    pub life: i64,
    pub recover: i64,
    pub damage: CourseDamage,
    /// Always empty for random courses.
    pub course_music: Vec<CourseMusic>,
}

/// Life lost per judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CourseDamage {
    pub perfect: i64,
    pub great: i64,
    pub good: i64,
    pub miss: i64,
}

/// A fixed track in a non-random course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseMusic {
    pub music: MusicRef,
    pub difficulty: DifficultyRef,
}
