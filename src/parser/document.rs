//! XML document tree.
//!
//! Opt package documents are small, so each one is read fully into an
//! [`Element`] tree. Category parsers then walk the tree through the typed
//! accessors below, which turn absent elements and bad values into
//! [`DocumentError`]s naming the offending `parent/child` element.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::DocumentError;
use crate::types::{parse_flag, Colour, LocalizedId};

/// An XML element with its text content and child elements.
///
/// Attributes are not kept; opt package data lives entirely in element text.
/// `text` is `None` for elements without any text, such as `<str/>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// First direct child with the given tag, if any.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given tag, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First direct child with the given tag, or a missing-element error.
    pub fn child(&self, name: &str) -> Result<&Element, DocumentError> {
        self.find(name)
            .ok_or_else(|| DocumentError::MissingElement(self.path_of(name)))
    }

    /// Text content of a direct child, empty when it has none.
    pub fn text_of(&self, name: &str) -> Result<&str, DocumentError> {
        self.child(name).map(|c| c.text.as_deref().unwrap_or(""))
    }

    /// Text content of a direct child, `None` when it has none.
    pub fn string(&self, name: &str) -> Result<Option<String>, DocumentError> {
        self.child(name).map(|c| c.text.clone())
    }

    pub fn int(&self, name: &str) -> Result<i64, DocumentError> {
        let text = self.text_of(name)?;
        text.trim().parse().map_err(|_| self.invalid_number(name, text))
    }

    pub fn float(&self, name: &str) -> Result<f64, DocumentError> {
        let text = self.text_of(name)?;
        text.trim().parse().map_err(|_| self.invalid_number(name, text))
    }

    pub fn flag(&self, name: &str) -> Result<bool, DocumentError> {
        parse_flag(&self.path_of(name), self.text_of(name)?)
    }

    /// Read this element as a reference with `<id>` and `<str>` children.
    pub fn as_localized(&self) -> Result<LocalizedId, DocumentError> {
        Ok(LocalizedId {
            id: self.int("id")?,
            name: self.string("str")?,
        })
    }

    /// Read a child reference element.
    pub fn localized(&self, name: &str) -> Result<LocalizedId, DocumentError> {
        self.child(name)?.as_localized()
    }

    /// Read a reference element straight into a named reference type.
    pub fn reference<T: From<LocalizedId>>(&self, name: &str) -> Result<T, DocumentError> {
        self.localized(name).map(T::from)
    }

    /// Read a colour element with `<R>`, `<G>` and `<B>` children.
    pub fn colour(&self, name: &str) -> Result<Colour, DocumentError> {
        let element = self.child(name)?;
        Ok(Colour::rgb(
            element.component("R")?,
            element.component("G")?,
            element.component("B")?,
        ))
    }

    /// Items of a repeated container, e.g. `<Relax><ChallengeRelax/>...</Relax>`.
    ///
    /// The container must exist; it may be empty.
    pub fn items<'a>(
        &'a self,
        container: &str,
        item: &'a str,
    ) -> Result<Vec<&'a Element>, DocumentError> {
        Ok(self.child(container)?.find_all(item).collect())
    }

    fn component(&self, name: &str) -> Result<u8, DocumentError> {
        let value = self.int(name)?;
        u8::try_from(value).map_err(|_| self.invalid_number(name, &value.to_string()))
    }

    fn path_of(&self, child: &str) -> String {
        format!("{}/{}", self.name, child)
    }

    fn invalid_number(&self, name: &str, text: &str) -> DocumentError {
        DocumentError::InvalidNumber {
            element: self.path_of(name),
            value: text.to_string(),
        }
    }
}

/// Parse XML text into an element tree and return its root.
pub fn parse_xml(source: &str) -> Result<Element, DocumentError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut reader = Reader::from_str(source);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push(Element::new(tag));
            }
            Ok(Event::Empty(e)) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                attach(&mut stack, &mut root, Element::new(tag));
            }
            Ok(Event::End(_)) => {
                if let Some(node) = stack.pop() {
                    attach(&mut stack, &mut root, node);
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(node) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|e| DocumentError::Xml(e.to_string()))?;
                    append_text(node, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(node) = stack.last_mut() {
                    append_text(node, &String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(DocumentError::Xml(format!(
                    "at position {}: {}",
                    reader.error_position(),
                    e
                )))
            }
        }
    }

    if let Some(open) = stack.first() {
        return Err(DocumentError::Xml(format!("unclosed element <{}>", open.name)));
    }

    root.ok_or_else(|| DocumentError::Xml("no root element found".to_string()))
}

fn append_text(node: &mut Element, text: &str) {
    if !text.is_empty() {
        node.text.get_or_insert_with(String::new).push_str(text);
    }
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, node: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => {
            if root.is_none() {
                *root = Some(node);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<MusicData xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <name>
    <id>11</id>
    <str>Technicians High</str>
  </name>
  <bpm>210.5</bpm>
  <disable>false</disable>
  <empty />
  <Color><R>255</R><G>0</G><B>128</B></Color>
  <list>
    <item>a</item>
    <other>x</other>
    <item>b</item>
  </list>
</MusicData>"#;

    #[test]
    fn test_parse_tree() {
        let root = parse_xml(SAMPLE).unwrap();
        assert_eq!(root.name, "MusicData");
        assert_eq!(root.children.len(), 6);
        assert_eq!(root.child("name").unwrap().children.len(), 2);
    }

    #[test]
    fn test_localized() {
        let root = parse_xml(SAMPLE).unwrap();
        assert_eq!(
            root.localized("name").unwrap(),
            LocalizedId::new(11, "Technicians High")
        );
    }

    #[test]
    fn test_scalars() {
        let root = parse_xml(SAMPLE).unwrap();
        assert_eq!(root.float("bpm").unwrap(), 210.5);
        assert!(!root.flag("disable").unwrap());
        assert_eq!(root.string("empty").unwrap(), None);
        assert_eq!(root.text_of("empty").unwrap(), "");
        assert_eq!(root.colour("Color").unwrap().to_hex(), "#FF0080");
    }

    #[test]
    fn test_items_keep_order_and_tag() {
        let root = parse_xml(SAMPLE).unwrap();
        let items: Vec<&str> = root
            .items("list", "item")
            .unwrap()
            .into_iter()
            .map(|e| e.text.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_missing_element() {
        let root = parse_xml(SAMPLE).unwrap();
        assert_eq!(
            root.int("level").unwrap_err(),
            DocumentError::MissingElement("MusicData/level".to_string())
        );
        assert!(root.items("notesData", "Notes").is_err());
    }

    #[test]
    fn test_invalid_values() {
        let root = parse_xml("<R><a>abc</a><b>maybe</b><C><R>256</R><G>0</G><B>0</B></C></R>")
            .unwrap();
        assert!(matches!(
            root.int("a"),
            Err(DocumentError::InvalidNumber { .. })
        ));
        assert!(matches!(
            root.flag("b"),
            Err(DocumentError::InvalidFlag { .. })
        ));
        assert!(matches!(
            root.colour("C"),
            Err(DocumentError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_escaped_and_non_ascii_text() {
        let root = parse_xml("<r><str>ぼくらの&amp;16bit戦争</str></r>").unwrap();
        assert_eq!(root.text_of("str").unwrap(), "ぼくらの&16bit戦争");
    }

    #[test]
    fn test_empty_text_is_none() {
        let root = parse_xml(
            "<r><a/><b></b><c> </c><name><id>5</id><str/></name></r>",
        )
        .unwrap();

        assert_eq!(root.string("a").unwrap(), None);
        assert_eq!(root.string("b").unwrap(), None);
        assert_eq!(root.string("c").unwrap().as_deref(), Some(" "));
        assert_eq!(root.localized("name").unwrap(), LocalizedId::unnamed(5));
    }

    #[test]
    fn test_bom_is_ignored() {
        let root = parse_xml("\u{feff}<r><id>1</id></r>").unwrap();
        assert_eq!(root.int("id").unwrap(), 1);
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(parse_xml(""), Err(DocumentError::Xml(_))));
        assert!(matches!(parse_xml("<a><b></a>"), Err(DocumentError::Xml(_))));
        assert!(matches!(parse_xml("<a><b>"), Err(DocumentError::Xml(_))));
    }
}
