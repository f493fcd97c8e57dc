//! Small xmltree helpers shared by the binding crates.

use std::fmt::Display;
use std::str::FromStr;
use xmltree::{Element, XMLNode};

use crate::error::CallError;

/// Iterate over the element children of a node, skipping text and comments.
pub fn xml_children(element: &Element) -> impl Iterator<Item = &Element> {
    element.children.iter().filter_map(|node| node.as_element())
}

/// First child element with the given local name.
pub fn child<'a>(element: &'a Element, name: &str) -> Option<&'a Element> {
    xml_children(element).find(|e| e.name == name)
}

/// Trimmed, non-empty text of a child element.
pub fn child_text(element: &Element, name: &str) -> Option<String> {
    child(element, name)
        .and_then(|e| e.get_text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Build `<name>text</name>`.
pub fn text_element(name: &str, text: &str) -> Element {
    let mut element = Element::new(name);
    element.children.push(XMLNode::Text(text.to_string()));
    element
}

pub fn push_child(parent: &mut Element, child: Element) {
    parent.children.push(XMLNode::Element(child));
}

pub fn push_text_child(parent: &mut Element, name: &str, value: &str) {
    push_child(parent, text_element(name, value));
}

/// Parse the text of a child element, `None` when the child is absent.
pub fn parse_child<T>(element: &Element, name: &str) -> Result<Option<T>, CallError>
where
    T: FromStr,
    T::Err: Display,
{
    match child_text(element, name) {
        Some(text) => text
            .parse::<T>()
            .map(Some)
            .map_err(|e| CallError::Serialization(format!("invalid <{}> value '{text}': {e}", name))),
        None => Ok(None),
    }
}

/// Parse the text of a child element, falling back to the default value
/// when the child is absent (the omit-when-zero wire convention).
pub fn parse_child_or_default<T>(element: &Element, name: &str) -> Result<T, CallError>
where
    T: FromStr + Default,
    T::Err: Display,
{
    Ok(parse_child(element, name)?.unwrap_or_default())
}
