//! Static page chrome: banner, header and footer.

use std::fmt::Write;

use pkgdocs_nav::{PackageInfo, escape};

/// Notice shown above every page, linking elsewhere.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub href: String,
    pub text: String,
}

pub(crate) fn render_banner(banner: &Banner) -> String {
    format!(
        "<div class=\"docs-banner\"><a href=\"{}\">{}</a></div>",
        escape(&banner.href),
        escape(&banner.text),
    )
}

pub(crate) fn render_footer(copyright: &str, text_muted_class: &str) -> String {
    format!(
        "<small class=\"docs-copyright {}\">&copy; {}</small>",
        escape(text_muted_class),
        escape(copyright),
    )
}

/// Sidebar header: site title, version list and the dark theme switch.
pub(crate) fn render_header(title: &str, versions: &[PackageInfo], use_dark: bool) -> String {
    let mut html = String::with_capacity(512);
    html.push_str("<div class=\"docs-nav-header\">\n");
    let _ = writeln!(
        html,
        "<a class=\"docs-logo\" href=\"#\">{}</a>",
        escape(title)
    );

    if !versions.is_empty() {
        html.push_str("<ul class=\"docs-versions\">\n");
        for version in versions {
            let _ = writeln!(
                html,
                "<li><a href=\"{}\" target=\"_blank\">v{}</a></li>",
                escape(&version.url),
                escape(&version.version),
            );
        }
        html.push_str("</ul>\n");
    }

    let checked = if use_dark { " checked=\"checked\"" } else { "" };
    let _ = writeln!(
        html,
        "<label class=\"docs-switch\"><input type=\"checkbox\" data-action=\"toggle-dark\"{checked} /><span>Dark theme</span></label>"
    );
    html.push_str("</div>");
    html
}
