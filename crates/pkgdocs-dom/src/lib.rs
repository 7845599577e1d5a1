//! Simulated document fragments and post-render fixups for pkgdocs.
//!
//! A rendered page is parsed into a [`Document`] of [`Element`]s. Elements
//! keep markup attributes apart from live [`ElementProperties`], the state a
//! browser holds on a DOM node but cannot express in markup.
//!
//! [`IndeterminateFixup`] is the hook a shell runs after every section change
//! to set the indeterminate state of flagged checkboxes.

mod document;
mod error;
mod fixup;
mod parser;

pub use document::{Document, Element, ElementProperties};
pub use error::DocumentError;
pub use fixup::IndeterminateFixup;
