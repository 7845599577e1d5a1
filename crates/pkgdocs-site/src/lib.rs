//! Documentation site composition for pkgdocs.
//!
//! This crate provides:
//! - [`SiteData`]: the section tree and release lists, loaded from JSON or YAML
//! - [`DocumentationComposer`]: owns the theme and implements [`ShellExtensions`]
//! - [`StaticShell`]: lays out pages by calling the extension points
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pkgdocs_config::Config;
//! use pkgdocs_site::{DocumentationComposer, HotkeysOverlay, SiteData, StaticShell};
//!
//! let data = SiteData::from_json(
//!     r#"{"sections": [{"route": "core", "title": "Core", "level": 1}]}"#,
//! )
//! .unwrap();
//! let mut config = Config::default();
//! config.theme_resolved.state_dir = std::env::temp_dir().join("pkgdocs-site-doc");
//!
//! let composer = DocumentationComposer::from_config(&config, data, Arc::new(HotkeysOverlay::new()));
//! let page = StaticShell::new(composer.data()).render(&composer, None, "").unwrap();
//! assert_eq!(page.route, "core");
//! ```

mod composer;
mod data;
mod presentation;
mod shell;

pub use composer::{
    ComposerOptions, DocumentationComposer, HotkeysOverlay, OverlaySurface, ShellExtensions,
};
pub use data::{SiteData, SiteDataError};
pub use presentation::Banner;
pub use shell::{RenderedPage, ShellError, StaticShell};
