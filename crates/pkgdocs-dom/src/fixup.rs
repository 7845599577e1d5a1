//! Indeterminate checkbox fixup.

use crate::{Document, Element};

/// Marker attribute flagging a checkbox as indeterminate.
const INDETERMINATE_ATTR: &str = "indeterminate";

/// Sets the indeterminate property of flagged checkboxes.
///
/// Matches `input` elements carrying the `indeterminate` attribute that sit
/// anywhere inside an element with the checkbox class, i.e. the selector
/// `.{checkbox_class} input[indeterminate]`. Markup has no attribute for the
/// indeterminate state, so it must be set on the live element after every
/// render.
#[derive(Clone, Debug)]
pub struct IndeterminateFixup {
    checkbox_class: String,
}

impl IndeterminateFixup {
    #[must_use]
    pub fn new(checkbox_class: impl Into<String>) -> Self {
        Self {
            checkbox_class: checkbox_class.into(),
        }
    }

    /// Apply the fixup and return how many elements changed.
    ///
    /// Running it again on the same document changes nothing and returns 0.
    pub fn apply(&self, document: &mut Document) -> usize {
        let changed = self.apply_within(document.root_mut(), false);
        tracing::debug!(changed, "applied indeterminate checkbox fixup");
        changed
    }

    fn apply_within(&self, element: &mut Element, inside_checkbox: bool) -> usize {
        let mut changed = 0;
        for child in &mut element.children {
            if inside_checkbox
                && child.tag == "input"
                && child.has_attr(INDETERMINATE_ATTR)
                && !child.properties.indeterminate
            {
                child.properties.indeterminate = true;
                changed += 1;
            }
            let inside = inside_checkbox || child.has_class(&self.checkbox_class);
            changed += self.apply_within(child, inside);
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<section>
  <label class="docs-control docs-checkbox"><input type="checkbox" indeterminate="" /><span>Partial</span></label>
  <label class="docs-control docs-checkbox"><input type="checkbox" /><span>Plain</span></label>
  <div class="docs-checkbox"><div><input type="checkbox" indeterminate /></div></div>
  <label class="docs-switch"><input type="checkbox" indeterminate /></label>
</section>"#;

    fn indeterminate_flags(doc: &Document) -> Vec<bool> {
        doc.descendants()
            .into_iter()
            .filter(|e| e.tag == "input")
            .map(|e| e.properties.indeterminate)
            .collect()
    }

    #[test]
    fn test_sets_flagged_checkboxes_inside_checkbox_class() {
        let mut doc = Document::parse(PAGE).unwrap();
        let changed = IndeterminateFixup::new("docs-checkbox").apply(&mut doc);

        assert_eq!(changed, 2);
        assert_eq!(indeterminate_flags(&doc), vec![true, false, true, false]);
    }

    #[test]
    fn test_idempotent() {
        let mut doc = Document::parse(PAGE).unwrap();
        let fixup = IndeterminateFixup::new("docs-checkbox");

        assert_eq!(fixup.apply(&mut doc), 2);
        let after_first = doc.clone();
        assert_eq!(fixup.apply(&mut doc), 0);
        assert_eq!(doc, after_first);
    }

    #[test]
    fn test_leaves_attributes_untouched() {
        let mut doc = Document::parse(PAGE).unwrap();
        let before: Vec<_> = doc.descendants().into_iter().map(|e| e.attrs.clone()).collect();

        IndeterminateFixup::new("docs-checkbox").apply(&mut doc);

        let after: Vec<_> = doc.descendants().into_iter().map(|e| e.attrs.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_no_checkboxes_is_noop() {
        let mut doc = Document::parse("<p>No inputs here</p>").unwrap();
        assert_eq!(IndeterminateFixup::new("docs-checkbox").apply(&mut doc), 0);
    }

    #[test]
    fn test_input_carrying_checkbox_class_itself_is_not_matched() {
        let mut doc =
            Document::parse(r#"<input class="docs-checkbox" type="checkbox" indeterminate />"#)
                .unwrap();
        assert_eq!(IndeterminateFixup::new("docs-checkbox").apply(&mut doc), 0);
    }
}
