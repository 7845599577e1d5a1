//! Navigation item rendering.
//!
//! [`NavItemRenderer::render`] turns one [`Section`] into a
//! [`RenderedNavItem`]; [`NavItemRenderer::to_html`] serializes it. Rendering
//! borrows its inputs immutably and keeps no state between calls.

use std::fmt::Write;

use crate::html::escape;
use crate::{PackageInfo, RouteVariant, Section, classify, nav_icon, resolve_badge};

/// Class marking a package root entry.
const PACKAGE_CLASS: &str = "docs-nav-package";
/// Classes of the expanded, non-interactive components header.
const SECTION_HEADER_CLASS: &str = "docs-nav-section docs-nav-expanded";
const ACTIVE_CLASS: &str = "docs-nav-active";
const EXPANDED_CLASS: &str = "docs-nav-expanded";

/// Style classes used in item markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavClasses {
    /// Class of menu item links.
    pub menu_item: String,
    /// Class of the muted release badge link.
    pub text_muted: String,
}

impl Default for NavClasses {
    fn default() -> Self {
        Self {
            menu_item: "docs-menu-item".to_owned(),
            text_muted: "docs-text-muted".to_owned(),
        }
    }
}

/// Props of the shell's default menu item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavMenuItemProps {
    pub route: String,
    pub title: String,
    /// Link target.
    pub href: String,
    /// Extra class supplied by the shell.
    pub class_name: Option<String>,
    /// True when this item is the current page.
    pub is_active: bool,
    /// True when this item's children are shown.
    pub is_expanded: bool,
}

impl NavMenuItemProps {
    /// Default props for a section: `#route` link, inactive, collapsed.
    #[must_use]
    pub fn for_section(section: &Section) -> Self {
        Self {
            route: section.route.clone(),
            title: section.title.clone(),
            href: format!("#{}", section.route),
            class_name: None,
            is_active: false,
            is_expanded: false,
        }
    }

    /// Default menu item markup.
    pub fn to_html(&self, menu_item_class: &str) -> String {
        let classes = class_list(&[
            menu_item_class,
            self.class_name.as_deref().unwrap_or_default(),
            if self.is_active { ACTIVE_CLASS } else { "" },
            if self.is_expanded { EXPANDED_CLASS } else { "" },
        ]);
        format!(
            "<a class=\"{}\" href=\"{}\">{}</a>",
            escape(&classes),
            escape(&self.href),
            escape(&self.title),
        )
    }
}

/// Input to [`NavItemRenderer::render`].
#[derive(Debug)]
pub struct NavRenderRequest<'a> {
    pub section: &'a Section,
    /// Release records to draw badges from.
    pub releases: &'a [PackageInfo],
    /// Props the shell would render this item with by default.
    pub default_props: NavMenuItemProps,
}

/// Rendered navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedNavItem {
    /// Package page with icon and, when released, a version badge.
    PackageRoot {
        route: String,
        title: String,
        href: String,
        icon: &'static str,
        class_name: Option<String>,
        badge: Option<PackageInfo>,
    },
    /// Expanded header with no link and no click handler.
    SectionHeader { title: String },
    /// The shell's default item, props unchanged.
    Leaf(NavMenuItemProps),
}

impl RenderedNavItem {
    pub fn variant(&self) -> RouteVariant {
        match self {
            Self::PackageRoot { .. } => RouteVariant::PackageRoot,
            Self::SectionHeader { .. } => RouteVariant::ComponentsHeader,
            Self::Leaf(_) => RouteVariant::Leaf,
        }
    }

    /// Release badge, only ever present on package roots.
    pub fn badge(&self) -> Option<&PackageInfo> {
        match self {
            Self::PackageRoot { badge, .. } => badge.as_ref(),
            _ => None,
        }
    }

    /// False for the components header, which cannot be navigated to.
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::SectionHeader { .. })
    }
}

/// Builds navigation entries for a package documentation site.
#[derive(Clone, Debug)]
pub struct NavItemRenderer {
    scope: String,
    classes: NavClasses,
}

impl NavItemRenderer {
    /// Create a renderer matching release names as `scope` + route.
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            classes: NavClasses::default(),
        }
    }

    /// Use custom style classes.
    #[must_use]
    pub fn with_classes(mut self, classes: NavClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Package scope prefix.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Render one section.
    pub fn render(&self, request: &NavRenderRequest<'_>) -> RenderedNavItem {
        let section = request.section;
        match classify(&section.route, section.level, section.is_page_node()) {
            RouteVariant::PackageRoot => RenderedNavItem::PackageRoot {
                route: section.route.clone(),
                title: section.title.clone(),
                href: request.default_props.href.clone(),
                icon: nav_icon(&section.route),
                class_name: request.default_props.class_name.clone(),
                badge: resolve_badge(&self.scope, &section.route, request.releases).cloned(),
            },
            RouteVariant::ComponentsHeader => RenderedNavItem::SectionHeader {
                title: section.title.clone(),
            },
            RouteVariant::Leaf => RenderedNavItem::Leaf(request.default_props.clone()),
        }
    }

    /// Serialize a rendered item to HTML.
    pub fn to_html(&self, item: &RenderedNavItem) -> String {
        match item {
            RenderedNavItem::PackageRoot {
                route,
                title,
                href,
                icon,
                class_name,
                badge,
            } => {
                let mut html = String::with_capacity(256);
                let _ = write!(
                    html,
                    "<div class=\"{}\" data-route=\"{}\">",
                    escape(&class_list(&[
                        PACKAGE_CLASS,
                        class_name.as_deref().unwrap_or_default()
                    ])),
                    escape(route),
                );
                let _ = write!(
                    html,
                    "<a class=\"{}\" href=\"{}\"><span class=\"docs-nav-icon\" data-icon=\"{}\"></span><span>{}</span></a>",
                    escape(&self.classes.menu_item),
                    escape(href),
                    icon,
                    escape(title),
                );
                if let Some(pkg) = badge {
                    let _ = write!(
                        html,
                        "<a class=\"{}\" href=\"{}\" target=\"_blank\"><small>{}</small></a>",
                        escape(&self.classes.text_muted),
                        escape(&pkg.url),
                        escape(&pkg.version),
                    );
                }
                html.push_str("</div>");
                html
            }
            RenderedNavItem::SectionHeader { title } => {
                format!("<div class=\"{SECTION_HEADER_CLASS}\">{}</div>", escape(title))
            }
            RenderedNavItem::Leaf(props) => props.to_html(&self.classes.menu_item),
        }
    }
}

/// Join non-empty classes with single spaces.
fn class_list(classes: &[&str]) -> String {
    classes
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
