//! XHTML fragment parser.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::{DocumentError, Element};

/// Tag of the synthetic element wrapping a fragment.
const ROOT_TAG: &str = "pkgdocs-root";

/// HTML elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parses rendered page markup into an [`Element`] tree.
pub(crate) struct FragmentParser;

impl FragmentParser {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Parse `html` and return a synthetic root holding its top-level elements.
    pub(crate) fn parse(&self, html: &str) -> Result<Element, DocumentError> {
        let wrapped = format!("<{ROOT_TAG}>{html}</{ROOT_TAG}>");

        let mut reader = Reader::from_str(&wrapped);
        let config = reader.config_mut();
        config.trim_text(false);
        // Stray end tags of void elements are skipped below rather than rejected.
        config.check_end_names = false;

        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let tag = self.decode_tag(&reader, e.name().as_ref());
                    let attrs = self.decode_attrs(&reader, &e);
                    let mut root = self.parse_children(&mut reader, &tag)?;
                    root.tag = tag;
                    root.attrs = attrs;
                    return Ok(root);
                }
                Event::Eof => return Ok(Element::default()),
                _ => {}
            }
            buf.clear();
        }
    }

    fn parse_children<R: BufRead>(
        &self,
        reader: &mut Reader<R>,
        parent_tag: &str,
    ) -> Result<Element, DocumentError> {
        let mut buf = Vec::new();
        let mut node = Element::default();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let tag = self.decode_tag(reader, e.name().as_ref());
                    let attrs = self.decode_attrs(reader, &e);
                    let mut child = if VOID_ELEMENTS.contains(&tag.as_str()) {
                        Element::default()
                    } else {
                        self.parse_children(reader, &tag)?
                    };
                    child.tag = tag;
                    child.attrs = attrs;
                    node.children.push(child);
                }
                Event::Empty(e) => {
                    node.children.push(Element {
                        tag: self.decode_tag(reader, e.name().as_ref()),
                        attrs: self.decode_attrs(reader, &e),
                        ..Default::default()
                    });
                }
                Event::Text(e) => {
                    let text = reader.decoder().decode(&e)?.into_owned();
                    append_text(&mut node, &text);
                }
                Event::GeneralRef(e) => {
                    let entity = reader.decoder().decode(&e)?.into_owned();
                    append_text(&mut node, &decode_entity(&entity));
                }
                Event::CData(e) => {
                    append_text(&mut node, &String::from_utf8_lossy(&e));
                }
                Event::End(e) => {
                    if self.decode_tag(reader, e.name().as_ref()) == parent_tag {
                        return Ok(node);
                    }
                }
                Event::Eof => return Ok(node),
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
            buf.clear();
        }
    }

    fn decode_tag<R: BufRead>(&self, reader: &Reader<R>, name: &[u8]) -> String {
        reader.decoder().decode(name).map_or_else(
            |_| String::from_utf8_lossy(name).into_owned(),
            std::borrow::Cow::into_owned,
        )
    }

    /// Decode attributes, accepting HTML-style bare and unquoted attributes.
    fn decode_attrs<R: BufRead>(
        &self,
        reader: &Reader<R>,
        e: &BytesStart,
    ) -> HashMap<String, String> {
        let mut attrs = HashMap::new();
        for attr in e.html_attributes().flatten() {
            let key = self.decode_tag(reader, attr.key.as_ref());
            let value = attr.unescape_value().map_or_else(
                |_| String::from_utf8_lossy(&attr.value).into_owned(),
                std::borrow::Cow::into_owned,
            );
            attrs.insert(key, value);
        }
        attrs
    }
}

/// Append text to node's text or last child's tail.
fn append_text(node: &mut Element, text: &str) {
    if let Some(last_child) = node.children.last_mut() {
        last_child.tail.push_str(text);
    } else {
        node.text.push_str(text);
    }
}

/// Decode an entity reference name to its characters.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "apos" => "'".to_owned(),
        "quot" => "\"".to_owned(),
        "nbsp" => "\u{a0}".to_owned(),
        "copy" => "\u{a9}".to_owned(),
        s if s.starts_with('#') => {
            let code = if s.starts_with("#x") || s.starts_with("#X") {
                u32::from_str_radix(&s[2..], 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            code.and_then(char::from_u32)
                .map_or_else(|| format!("&{entity};"), |c| c.to_string())
        }
        _ => format!("&{entity};"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(html: &str) -> Element {
        FragmentParser::new().parse(html).unwrap()
    }

    #[test]
    fn test_parse_simple_element() {
        let root = parse("<p>Hello</p>");
        assert_eq!(root.tag, ROOT_TAG);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].tag, "p");
        assert_eq!(root.children[0].text, "Hello");
    }

    #[test]
    fn test_parse_text_and_tail() {
        let root = parse("<p><strong>Bold</strong> text</p>");
        let strong = &root.children[0].children[0];
        assert_eq!(strong.text, "Bold");
        assert_eq!(strong.tail, " text");
    }

    #[test]
    fn test_bare_boolean_attribute() {
        let root = parse(r#"<input type="checkbox" indeterminate />"#);
        let input = &root.children[0];
        assert_eq!(input.attr("type"), Some("checkbox"));
        assert_eq!(input.attr("indeterminate"), Some(""));
    }

    #[test]
    fn test_unclosed_void_element_does_not_swallow_siblings() {
        let root = parse(r#"<label><input type="checkbox"><span>Label</span></label>"#);
        let label = &root.children[0];
        assert_eq!(label.children.len(), 2);
        assert_eq!(label.children[0].tag, "input");
        assert!(label.children[0].children.is_empty());
        assert_eq!(label.children[1].tag, "span");
    }

    #[test]
    fn test_entities() {
        let root = parse("<small>&copy; 2024&nbsp;Docs &amp; &#x41;</small>");
        assert_eq!(root.children[0].text, "\u{a9} 2024\u{a0}Docs & A");
    }

    #[test]
    fn test_empty_fragment() {
        let root = parse("");
        assert!(root.children.is_empty());
    }
}
