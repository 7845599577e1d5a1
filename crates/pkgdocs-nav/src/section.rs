//! Section tree and release records.

use serde::{Deserialize, Serialize};

/// Whether a section is a navigable page or a heading inside one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    #[default]
    Page,
    Heading,
}

/// Node in the documentation tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Route identifier, unique across the tree (e.g., "core/components.button").
    pub route: String,
    /// Display title.
    pub title: String,
    /// Tree depth; 1 is a top-level package page.
    pub level: u32,
    #[serde(default)]
    pub kind: SectionKind,
    /// Child sections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Section>,
}

impl Section {
    /// Create a page section without children.
    #[must_use]
    pub fn page(route: impl Into<String>, title: impl Into<String>, level: u32) -> Self {
        Self {
            route: route.into(),
            title: title.into(),
            level,
            kind: SectionKind::Page,
            children: Vec::new(),
        }
    }

    /// Create a heading section without children.
    #[must_use]
    pub fn heading(route: impl Into<String>, title: impl Into<String>, level: u32) -> Self {
        Self {
            kind: SectionKind::Heading,
            ..Self::page(route, title, level)
        }
    }

    /// Attach children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Section>) -> Self {
        self.children = children;
        self
    }

    pub fn is_page_node(&self) -> bool {
        self.kind == SectionKind::Page
    }

    /// Visit this section and all descendants in pre-order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Section)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

/// Release record of a published package.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Package identifier (e.g., "@scope/core").
    pub name: String,
    pub version: String,
    /// Link to the release notes.
    pub url: String,
}

impl PackageInfo {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            url: url.into(),
        }
    }
}
