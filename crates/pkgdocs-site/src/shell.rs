//! Static documentation shell.
//!
//! Lays out one page per route: banner, a sidebar with the header and the
//! navigation tree, the page content with its "view source" link, and the
//! footer. Every extension point comes from a [`ShellExtensions`]
//! implementation.

use std::fmt::Write;

use pkgdocs_dom::{Document, DocumentError};
use pkgdocs_nav::{NavMenuItemProps, Section, escape};

use crate::{ShellExtensions, SiteData};

/// Error rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Requested route is not in the section tree.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),
    /// Section tree has no sections to show.
    #[error("Site has no sections")]
    EmptySite,
    /// Rendered markup could not be parsed back into a document.
    #[error("Rendered page is not well-formed: {0}")]
    Document(#[from] DocumentError),
}

/// A page committed by the shell.
#[derive(Debug)]
pub struct RenderedPage {
    /// Route shown.
    pub route: String,
    /// Page title.
    pub title: String,
    /// Page root markup.
    pub html: String,
    /// Parsed page after section change hooks ran.
    pub document: Document,
    /// Elements changed by the section change hook.
    pub fixups: usize,
}

impl RenderedPage {
    /// Complete HTML document wrapping the page root.
    pub fn to_html_document(&self) -> String {
        let mut html = String::with_capacity(self.html.len() + 256);
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        let _ = writeln!(html, "<title>{}</title>", escape(&self.title));
        html.push_str("</head>\n<body>\n");
        html.push_str(&self.html);
        html.push_str("\n</body>\n</html>\n");
        html
    }
}

/// Host shell over already-loaded site data.
pub struct StaticShell<'a> {
    data: &'a SiteData,
}

impl<'a> StaticShell<'a> {
    #[must_use]
    pub fn new(data: &'a SiteData) -> Self {
        Self { data }
    }

    /// Render the page for `route`, or the default page when `None`.
    ///
    /// `content_html` is placed in the page body as is and must be
    /// well-formed XHTML.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] if the route is unknown, the site is empty, or
    /// the resulting markup cannot be parsed.
    pub fn render(
        &self,
        ext: &impl ShellExtensions,
        route: Option<&str>,
        content_html: &str,
    ) -> Result<RenderedPage, ShellError> {
        let route = match route {
            Some(route) => route,
            None => self.data.default_route().ok_or(ShellError::EmptySite)?,
        };
        let section = self
            .data
            .find(route)
            .ok_or_else(|| ShellError::UnknownRoute(route.to_owned()))?;

        let html = self.layout(ext, section, content_html);

        let mut document = Document::parse(&html)?;
        let fixups = ext.on_section_change(&mut document);
        tracing::debug!(route, fixups, "committed page");

        Ok(RenderedPage {
            route: section.route.clone(),
            title: section.title.clone(),
            html,
            document,
            fixups,
        })
    }

    fn layout(&self, ext: &impl ShellExtensions, active: &Section, content_html: &str) -> String {
        let mut html = String::with_capacity(8192);
        let page_class = ext.page_class();
        if page_class.is_empty() {
            html.push_str("<div class=\"docs-root\">\n");
        } else {
            let _ = writeln!(html, "<div class=\"docs-root {}\">", escape(page_class));
        }

        if let Some(banner) = ext.banner() {
            html.push_str(&banner);
            html.push('\n');
        }

        html.push_str("<div class=\"docs-app\">\n");
        html.push_str("<aside class=\"docs-nav\">\n");
        html.push_str(&ext.header());
        html.push_str("\n<nav>\n");
        render_nav_items(&mut html, ext, &self.data.sections, &active.route);
        html.push_str("</nav>\n</aside>\n");

        html.push_str("<main class=\"docs-content\">\n");
        let _ = writeln!(html, "<h1>{}</h1>", escape(&active.title));
        self.render_view_source(&mut html, ext, &active.route);
        html.push_str("<article>\n");
        html.push_str(content_html);
        html.push_str("\n</article>\n");
        if let Some(footer) = ext.footer() {
            html.push_str(&footer);
            html.push('\n');
        }
        html.push_str("</main>\n</div>\n</div>");
        html
    }

    fn render_view_source(&self, html: &mut String, ext: &impl ShellExtensions, route: &str) {
        let Some(file_name) = self.data.sources.get(route) else {
            return;
        };
        match ext.view_source_label(file_name) {
            Ok(label) => {
                let _ = writeln!(
                    html,
                    "<div class=\"docs-view-source\">View source in <code>{}</code></div>",
                    escape(&label)
                );
            }
            Err(e) => tracing::warn!(route, error = %e, "omitting view source link"),
        }
    }
}

fn render_nav_items(
    html: &mut String,
    ext: &impl ShellExtensions,
    sections: &[Section],
    active_route: &str,
) {
    if sections.is_empty() {
        return;
    }
    html.push_str("<ul>\n");
    for section in sections {
        let mut props = NavMenuItemProps::for_section(section);
        props.is_active = section.route == active_route;
        props.is_expanded = contains_route(section, active_route);

        html.push_str("<li>");
        html.push_str(&ext.render_nav_item(section, props));
        html.push('\n');
        render_nav_items(html, ext, &section.children, active_route);
        html.push_str("</li>\n");
    }
    html.push_str("</ul>\n");
}

/// True when `route` is `section` or one of its descendants.
fn contains_route(section: &Section, route: &str) -> bool {
    section.route == route || section.children.iter().any(|c| contains_route(c, route))
}
