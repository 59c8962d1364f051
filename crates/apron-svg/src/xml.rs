//! XML serialization and parsing for the generic element tree.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::{Element, Node, SvgError};

/// Serialize an element tree to markup (no XML declaration).
pub fn to_string(root: &Element) -> Result<String, SvgError> {
    let mut writer = Writer::new(Vec::new());
    write_element(&mut writer, root)?;
    String::from_utf8(writer.into_inner()).map_err(write_err)
}

fn write_element(writer: &mut Writer<Vec<u8>>, el: &Element) -> Result<(), SvgError> {
    let mut start = BytesStart::new(el.name.as_str());
    for (key, value) in &el.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if el.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(write_err);
    }

    writer.write_event(Event::Start(start)).map_err(write_err)?;
    for child in &el.children {
        match child {
            Node::Element(child) => write_element(writer, child)?,
            Node::Text(text) => writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(write_err)?,
        }
    }
    writer
        .write_event(Event::End(BytesEnd::new(el.name.as_str())))
        .map_err(write_err)
}

fn write_err(e: impl std::fmt::Display) -> SvgError {
    SvgError::Write(e.to_string())
}

fn parse_err(e: impl std::fmt::Display) -> SvgError {
    SvgError::Parse(e.to_string())
}

/// Parse markup into its root element.
///
/// Comments, processing instructions and the doctype are dropped; whitespace-only
/// text between elements is dropped; character and predefined entity references
/// are resolved.
pub fn parse(markup: &str) -> Result<Element, SvgError> {
    let mut reader = Reader::from_str(markup);
    reader.config_mut().trim_text(false);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event().map_err(parse_err)? {
            Event::Start(start) => stack.push(open_element(&start)?),
            Event::Empty(start) => {
                let el = open_element(&start)?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::End(_) => {
                let el = stack
                    .pop()
                    .ok_or_else(|| SvgError::Parse("unbalanced end tag".to_string()))?;
                attach(&mut stack, &mut root, el)?;
            }
            Event::Text(text) => {
                let raw = String::from_utf8_lossy(&text);
                let text = quick_xml::escape::unescape(&raw).map_err(parse_err)?;
                push_text(&mut stack, &text);
            }
            Event::CData(data) => {
                push_text(&mut stack, &String::from_utf8_lossy(&data));
            }
            Event::GeneralRef(reference) => {
                let name = String::from_utf8_lossy(&reference);
                let resolved = resolve_entity(&name)
                    .ok_or_else(|| SvgError::Parse(format!("unknown entity `&{};`", name)))?;
                push_text(&mut stack, &resolved);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(SvgError::Parse(format!("unclosed element `{}`", open.name)));
    }
    root.ok_or(SvgError::MissingRoot)
}

fn open_element(start: &BytesStart<'_>) -> Result<Element, SvgError> {
    let mut el = Element::new(String::from_utf8_lossy(start.name().as_ref()).into_owned());
    for attr in start.attributes() {
        let attr = attr.map_err(parse_err)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value);
        let value = quick_xml::escape::unescape(&raw).map_err(parse_err)?;
        el.attributes.push((key, value.into_owned()));
    }
    Ok(el)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    el: Element,
) -> Result<(), SvgError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(Node::Element(el));
            Ok(())
        }
        None if root.is_none() => {
            *root = Some(el);
            Ok(())
        }
        None => Err(SvgError::Parse("more than one root element".to_string())),
    }
}

fn push_text(stack: &mut [Element], text: &str) {
    let Some(parent) = stack.last_mut() else {
        return;
    };
    // Adjacent text pieces (split around entity references) merge into one node
    if let Some(Node::Text(existing)) = parent.children.last_mut() {
        existing.push_str(text);
        return;
    }
    if text.trim().is_empty() {
        return;
    }
    parent.children.push(Node::Text(text.to_string()));
}

fn resolve_entity(name: &str) -> Option<Cow<'static, str>> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse::<u32>().ok()?,
        };
        return char::from_u32(value).map(|c| Cow::Owned(c.to_string()));
    }
    let resolved = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "nbsp" => "\u{00A0}",
        _ => return None,
    };
    Some(Cow::Borrowed(resolved))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_empty_elements_self_closing() {
        let el = Element::new("rect").with_attr("x", "1");
        assert_eq!(to_string(&el).unwrap(), r#"<rect x="1"/>"#);
    }

    #[test]
    fn escapes_text_and_attributes() {
        let el = Element::new("text")
            .with_attr("data-note", "a<b & \"c\"")
            .with_child(Node::Text("Tom & Jerry <3".to_string()));
        let markup = to_string(&el).unwrap();
        assert!(!markup.contains("& "), "{markup}");
        let back = parse(&markup).unwrap();
        assert_eq!(back.attr("data-note"), Some("a<b & \"c\""));
        assert_eq!(back.text(), "Tom & Jerry <3");
    }

    #[test]
    fn parses_nested_tree_and_skips_whitespace() {
        let markup = r#"<?xml version="1.0"?>
            <!-- artwork -->
            <svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 20">
                <g id="a">
                    <circle cx="5" cy="5" r="2"/>
                </g>
                <text>x &#x41; y</text>
            </svg>"#;
        let root = parse(markup).unwrap();
        assert_eq!(root.name, "svg");
        assert_eq!(root.attr("viewBox"), Some("0 0 10 20"));
        let children: Vec<_> = root.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(children, ["g", "text"]);
        assert_eq!(root.descendants().len(), 3);
        assert_eq!(root.elements().nth(1).unwrap().text(), "x A y");
    }

    #[test]
    fn rejects_unbalanced_markup() {
        assert!(parse("<svg><g></svg>").is_err());
        assert!(parse("<svg>").is_err());
        assert_eq!(parse("   "), Err(SvgError::MissingRoot));
    }

    #[test]
    fn roundtrip_preserves_structure() {
        let el = Element::new("svg")
            .with_attr("width", "10")
            .with_child(Element::new("path").with_attr("d", "M 0 0 L 1 1 Z"))
            .with_child(Element::new("text").with_child(Node::Text("hello".into())));
        let markup = to_string(&el).unwrap();
        assert_eq!(parse(&markup).unwrap(), el);
    }
}
