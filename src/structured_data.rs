// Copyright (C) 2022-2026 Michael Herstine <sp1ff@pobox.com>
//
// This file is part of syslog-formatter.
//
// syslog-formatter is free software: you can redistribute it and/or modify it under the terms of
// the GNU General Public License as published by the Free Software Foundation, either version 3 of
// the License, or (at your option) any later version.
//
// syslog-formatter is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with syslog-formatter.
// If not, see <http://www.gnu.org/licenses/>.

//! RFC [5424] STRUCTURED-DATA.
//!
//! [5424]: https://datatracker.ietf.org/doc/html/rfc5424#section-6.3
//!
//! A [`StructuredElement`] is one SD-ELEMENT: an SD-ID and an ordered list of parameters,
//! serialized as `[id key="value" ...]`. A [`StructuredData`] is the ordered collection of
//! elements attached to one message; it serializes to the concatenation of its elements, or to
//! the NILVALUE when there is nothing to say.
//!
//! Parameters are kept in insertion order, so the same element always serializes to the same
//! text.

use crate::header::NILVALUE;

/// Append ` key="value"` to `out`.
pub(crate) fn push_param(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

/// One SD-ELEMENT
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructuredElement {
    id: String,
    params: Vec<(String, String)>,
}

impl StructuredElement {
    /// A new element with SD-ID `id` & no parameters
    pub fn new(id: impl Into<String>) -> StructuredElement {
        StructuredElement {
            id: id.into(),
            params: Vec::new(),
        }
    }
    /// Append a parameter; `value` is rendered through its [`Display`](std::fmt::Display)
    /// implementation.
    pub fn param(mut self, key: impl Into<String>, value: impl std::fmt::Display) -> Self {
        self.add_param(key, value);
        self
    }
    pub fn add_param(&mut self, key: impl Into<String>, value: impl std::fmt::Display) {
        self.params.push((key.into(), value.to_string()));
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
    /// An element with no SD-ID or no parameters produces no output.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() || self.params.is_empty()
    }
    /// `[id key="value" ...]`, or the empty string if this element [`is_empty`]
    ///
    /// [`is_empty`]: StructuredElement::is_empty
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }
    pub(crate) fn write_to(&self, out: &mut String) {
        if self.is_empty() {
            return;
        }
        out.push('[');
        out.push_str(&self.id);
        for (key, value) in &self.params {
            push_param(out, key, value);
        }
        out.push(']');
    }
}

impl std::fmt::Display for StructuredElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

/// The STRUCTURED-DATA attached to one message
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StructuredData {
    elements: Vec<StructuredElement>,
}

impl StructuredData {
    pub fn new() -> StructuredData {
        StructuredData::default()
    }
    /// Append `element`.
    pub fn push(&mut self, element: StructuredElement) {
        self.elements.push(element);
    }
    /// Drop every element, then append `element`.
    pub fn replace(&mut self, element: StructuredElement) {
        self.elements.clear();
        self.elements.push(element);
    }
    pub fn elements(&self) -> &[StructuredElement] {
        &self.elements
    }
    /// True if this collection would serialize to the NILVALUE
    pub fn is_empty(&self) -> bool {
        self.elements.iter().all(StructuredElement::is_empty)
    }
    /// The concatenation of all non-empty elements, or `-` if there are none.
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        self.elements.iter().for_each(|elt| elt.write_to(&mut out));
        if out.is_empty() {
            out.push_str(NILVALUE);
        }
        out
    }
}

impl std::iter::FromIterator<StructuredElement> for StructuredData {
    fn from_iter<I: IntoIterator<Item = StructuredElement>>(iter: I) -> Self {
        StructuredData {
            elements: iter.into_iter().collect(),
        }
    }
}

impl std::iter::Extend<StructuredElement> for StructuredData {
    fn extend<I: IntoIterator<Item = StructuredElement>>(&mut self, iter: I) {
        self.elements.extend(iter)
    }
}

impl std::fmt::Display for StructuredData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_element() {
        let elt = StructuredElement::new("exampleSDID@32473")
            .param("iut", 3)
            .param("eventSource", "Application")
            .param("eventID", 1011);
        assert_eq!(
            elt.serialize(),
            "[exampleSDID@32473 iut=\"3\" eventSource=\"Application\" eventID=\"1011\"]"
        );
        assert_eq!(format!("{}", elt), elt.serialize());
        assert_eq!(
            elt.params().collect::<Vec<_>>(),
            vec![("iut", "3"), ("eventSource", "Application"), ("eventID", "1011")]
        );

        let mut elt = StructuredElement::new("fields");
        elt.add_param("arg", 123);
        elt.add_param("arg2", "param");
        elt.add_param("flag", true);
        assert_eq!(
            elt.serialize(),
            "[fields arg=\"123\" arg2=\"param\" flag=\"true\"]"
        );
    }

    #[test]
    fn test_empty_elements() {
        assert!(StructuredElement::new("fields").is_empty());
        assert_eq!(StructuredElement::new("fields").serialize(), "");
        assert!(StructuredElement::new("").param("a", 1).is_empty());
        assert_eq!(StructuredElement::new("").param("a", 1).serialize(), "");
    }

    #[test]
    fn test_set() {
        assert_eq!(StructuredData::new().serialize(), "-");

        let sd: StructuredData = vec![
            StructuredElement::new("").param("a", 1),
            StructuredElement::new("b"),
        ]
        .into_iter()
        .collect();
        assert!(sd.is_empty());
        assert_eq!(sd.serialize(), "-");

        let mut sd = StructuredData::new();
        sd.push(StructuredElement::new("a").param("x", 1));
        sd.push(StructuredElement::new("skipped"));
        sd.push(StructuredElement::new("b").param("y", "two"));
        assert!(!sd.is_empty());
        assert_eq!(sd.serialize(), "[a x=\"1\"][b y=\"two\"]");
        assert_eq!(sd.elements().len(), 3);

        sd.replace(StructuredElement::new("c").param("z", 3.5));
        assert_eq!(format!("{}", sd), "[c z=\"3.5\"]");
    }
}
