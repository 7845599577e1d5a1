//! Element tree of a rendered page.

use std::collections::HashMap;

use crate::DocumentError;
use crate::parser::FragmentParser;

/// Live state of an element that markup has no attribute for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementProperties {
    /// Checkbox shows the "partially checked" state.
    pub indeterminate: bool,
}

/// Element with attributes, properties and children.
///
/// Text is kept ElementTree-style: `text` precedes the first child and each
/// child's `tail` follows it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: HashMap<String, String>,
    pub properties: ElementProperties,
    pub text: String,
    pub tail: String,
    pub children: Vec<Element>,
}

impl Element {
    /// Attribute value, `Some("")` for a bare boolean attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// True if `class` appears in the element's class list.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

/// Parsed page fragment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse an XHTML fragment.
    ///
    /// HTML void elements (`input`, `br`, ...) may be written without a
    /// closing slash and bare boolean attributes are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if the fragment is not well-formed enough to
    /// tokenize.
    pub fn parse(html: &str) -> Result<Self, DocumentError> {
        let root = FragmentParser::new().parse(html)?;
        Ok(Self { root })
    }

    /// Top-level elements of the fragment.
    pub fn elements(&self) -> &[Element] {
        &self.root.children
    }

    /// All elements in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        fn collect<'a>(element: &'a Element, out: &mut Vec<&'a Element>) {
            for child in &element.children {
                out.push(child);
                collect(child, out);
            }
        }
        let mut out = Vec::new();
        collect(&self.root, &mut out);
        out
    }

    /// Synthetic root wrapping the fragment's top-level elements.
    pub(crate) fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }
}
