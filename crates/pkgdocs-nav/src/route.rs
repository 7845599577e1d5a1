//! Route classification.

use std::sync::LazyLock;

use regex::Regex;

/// Components page and its subheadings, e.g. `core/components.button`.
static COMPONENTS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/components(\.\w+)?$").unwrap());

/// How a navigation entry is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteVariant {
    /// Top-level package page, decorated with a release badge.
    PackageRoot,
    /// Non-interactive header over the components list.
    ComponentsHeader,
    /// Default menu item.
    Leaf,
}

/// Decide the rendering variant of a route.
///
/// A level-1 page is a package root even if its route also matches the
/// components pattern.
pub fn classify(route: &str, level: u32, is_page_node: bool) -> RouteVariant {
    if is_page_node && level == 1 {
        RouteVariant::PackageRoot
    } else if COMPONENTS_PATTERN.is_match(route) {
        RouteVariant::ComponentsHeader
    } else {
        RouteVariant::Leaf
    }
}
