//! Parser modules for opt package documents.
//!
//! Every category document is an XML file whose root holds a fixed set of
//! child elements. [`parse_xml`] reads the file into an [`Element`] tree and
//! a category parser maps that tree onto its record type.
//!
//! # Usage
//!
//! ```ignore
//! use optx::parser::{parse_event, parse_xml};
//!
//! let source = std::fs::read_to_string("event/event00000001/Event.xml")?;
//! let root = parse_xml(&source)?;
//! let record = parse_event(&root, Path::new("event/event00000001"))?;
//! ```

pub mod chart;
mod challenge;
mod chara;
mod course;
mod decoration;
pub mod document;
mod event;
mod genre;
mod login_bonus;
mod map;
mod map_bonus_music;
mod map_color;
mod map_treasure;
mod music;

use std::path::Path;

use crate::error::DocumentError;

pub use challenge::parse_challenge;
pub use chara::parse_chara;
pub use chart::{parse_chart, read_chart};
pub use course::parse_course;
pub use decoration::{parse_frame, parse_icon};
pub use document::{parse_xml, Element};
pub use event::parse_event;
pub use genre::{parse_chara_genre, parse_collection_genre};
pub use login_bonus::parse_login_bonus;
pub use map::parse_map;
pub use map_bonus_music::parse_map_bonus_music;
pub use map_color::parse_map_color;
pub use map_treasure::parse_map_treasure;
pub use music::parse_music;

/// A category parser: maps a document's root element onto a record.
///
/// The second argument is the directory containing the document, against
/// which relative references (chart files) are resolved.
pub type DocumentParser<T> = fn(&Element, &Path) -> Result<T, DocumentError>;
