//! Course parser.
//!
//! Parses `Course.xml` documents. Random courses draw their tracks at play
//! time, so their fixed track list is never read.

use std::path::Path;

use crate::error::DocumentError;
use crate::types::{CourseDamage, CourseMusic, CourseRecord};

use super::document::Element;

/// Parse a `CourseData` document.
pub fn parse_course(root: &Element, _dir: &Path) -> Result<CourseRecord, DocumentError> {
    let is_random = root.flag("isRandom")?;

    let course_music = if is_random {
        Vec::new()
    } else {
        root.child("courseMusicData")?
            .items("list", "CourseMusicData")?
            .into_iter()
            .map(parse_course_music)
            .collect::<Result<Vec<_>, _>>()?
    };

    Ok(CourseRecord {
        course: root.reference("name")?,
        course_mode: root.reference("courseMode")?,
        base_dani: root.reference("baseDaniId")?,
        base_course: root.reference("baseCourseId")?,
        event: root.reference("eventId")?,
        is_random,
        upper_level: root.int("upperLevel")?,
        lower_level: root.int("lowerLevel")?,
        is_lock: root.flag("isLock")?,
        life: root.int("life")?,
        recover: root.int("recover")?,
        damage: CourseDamage {
            perfect: root.int("perfectDamage")?,
            great: root.int("greatDamage")?,
            good: root.int("goodDamage")?,
            miss: root.int("missDamage")?,
        },
        course_music,
    })
}

fn parse_course_music(entry: &Element) -> Result<CourseMusic, DocumentError> {
    Ok(CourseMusic {
        music: entry.reference("musicId")?,
        difficulty: entry.reference("difficulty")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_xml;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn course_xml(is_random: &str) -> String {
        format!(
            r#"<CourseData>
  <dataName>course000011</dataName>
  <name><id>11</id><str>初段</str></name>
  <courseMode><id>1</id><str>段位認定</str></courseMode>
  <baseDaniId><id>0</id><str>Invalid</str></baseDaniId>
  <baseCourseId><id>0</id><str>Invalid</str></baseCourseId>
  <eventId><id>1</id><str>無期限常時解放</str></eventId>
  <isRandom>{is_random}</isRandom>
  <upperLevel>9</upperLevel>
  <lowerLevel>7</lowerLevel>
  <isLock>false</isLock>
  <life>300</life>
  <recover>10</recover>
  <perfectDamage>0</perfectDamage>
  <greatDamage>2</greatDamage>
  <goodDamage>3</goodDamage>
  <missDamage>5</missDamage>
  <courseMusicData>
    <list>
      <CourseMusicData>
        <musicId><id>227</id><str>Sweets×Sweets</str></musicId>
        <difficulty><id>2</id><str>Expert</str></difficulty>
      </CourseMusicData>
      <CourseMusicData>
        <musicId><id>11</id><str>Technicians High</str></musicId>
        <difficulty><id>3</id><str>Master</str></difficulty>
      </CourseMusicData>
    </list>
  </courseMusicData>
</CourseData>"#
        )
    }

    #[test]
    fn test_parse_course() {
        let root = parse_xml(&course_xml("false")).unwrap();
        let record = parse_course(&root, Path::new(".")).unwrap();

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "courseId": 11,
                "courseName": "初段",
                "courseMode": {"modeId": 1, "modeName": "段位認定"},
                "baseDani": {"daniId": 0, "daniName": "Invalid"},
                "baseCourse": {"courseId": 0, "courseName": "Invalid"},
                "event": {"eventId": 1, "eventName": "無期限常時解放"},
                "isRandom": false,
                "upperLevel": 9,
                "lowerLevel": 7,
                "isLock": false,
                "life": 300,
                "recover": 10,
                "damage": {"perfect": 0, "great": 2, "good": 3, "miss": 5},
                "courseMusic": [
                    {
                        "music": {"musicId": 227, "musicName": "Sweets×Sweets"},
                        "difficulty": {"difficultyId": 2, "difficultyName": "Expert"}
                    },
                    {
                        "music": {"musicId": 11, "musicName": "Technicians High"},
                        "difficulty": {"difficultyId": 3, "difficultyName": "Master"}
                    }
                ]
            })
        );
    }

    #[test]
    fn test_random_course_has_no_music() {
        let root = parse_xml(&course_xml("true")).unwrap();
        let record = parse_course(&root, Path::new(".")).unwrap();

        assert!(record.is_random);
        assert!(record.course_music.is_empty());
    }

    #[test]
    fn test_random_course_ignores_broken_music_list() {
        let xml = course_xml("true")
            .replace("<musicId>", "<brokenId>")
            .replace("</musicId>", "</brokenId>");
        let root = parse_xml(&xml).unwrap();

        assert!(parse_course(&root, Path::new(".")).is_ok());
    }
}
