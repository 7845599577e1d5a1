//! Navigation sidebar items for pkgdocs.
//!
//! This crate provides:
//! - [`Section`] and [`PackageInfo`]: the section tree and release records
//! - [`classify`]: picks the rendering variant of a route
//! - [`resolve_badge`]: matches a package route to its release record
//! - [`NavItemRenderer`]: produces one [`RenderedNavItem`] per section
//! - [`view_source_label`]: labels "view source" links by package
//!
//! # Quick Start
//!
//! ```
//! use pkgdocs_nav::{NavItemRenderer, NavMenuItemProps, NavRenderRequest, PackageInfo, Section};
//!
//! let releases = vec![PackageInfo::new("@scope/table", "1.2.0", "https://example.com/table")];
//! let section = Section::page("table", "Table", 1);
//! let renderer = NavItemRenderer::new("@scope/");
//!
//! let item = renderer.render(&NavRenderRequest {
//!     section: &section,
//!     releases: &releases,
//!     default_props: NavMenuItemProps::for_section(&section),
//! });
//! assert_eq!(item.badge().map(|b| b.version.as_str()), Some("1.2.0"));
//! ```

mod badge;
mod html;
mod icon;
mod item;
mod route;
mod section;
mod view_source;

pub use badge::resolve_badge;
pub use html::escape;
pub use icon::nav_icon;
pub use item::{NavClasses, NavItemRenderer, NavMenuItemProps, NavRenderRequest, RenderedNavItem};
pub use route::{RouteVariant, classify};
pub use section::{PackageInfo, Section, SectionKind};
pub use view_source::{ViewSourceError, view_source_label};
