//! Documentation composer.
//!
//! [`DocumentationComposer`] owns the current theme and supplies the shell's
//! extension points ([`ShellExtensions`]). The theme is read from the
//! [`ThemeStore`] once at construction and changes only through
//! [`DocumentationComposer::toggle_dark`].

use std::sync::{Arc, RwLock};

use pkgdocs_config::Config;
use pkgdocs_dom::{Document, IndeterminateFixup};
use pkgdocs_nav::{
    NavClasses, NavItemRenderer, NavMenuItemProps, NavRenderRequest, RenderedNavItem, Section,
    ViewSourceError, view_source_label,
};
use pkgdocs_theme::{FilePreferenceStore, ThemeState, ThemeStore};

use crate::SiteData;
use crate::presentation::{Banner, render_banner, render_footer, render_header};

/// Rendering surface outside the main page tree, such as a dialog layer,
/// whose styling must follow the theme.
pub trait OverlaySurface: Send + Sync {
    /// Replace the surface's style class.
    fn set_class_name(&self, class_name: &str);
}

/// Shared style configuration of the keyboard shortcuts dialog.
///
/// Clones share one class name, so a host can hand one clone to the
/// composer and read the other when it opens the dialog.
#[derive(Clone, Debug, Default)]
pub struct HotkeysOverlay {
    class_name: Arc<RwLock<String>>,
}

impl HotkeysOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Class the dialog is currently styled with.
    pub fn class_name(&self) -> String {
        match self.class_name.read() {
            Ok(current) => current.clone(),
            Err(_) => {
                tracing::warn!("hotkeys overlay lock poisoned, reading unstyled");
                String::new()
            }
        }
    }
}

impl OverlaySurface for HotkeysOverlay {
    fn set_class_name(&self, class_name: &str) {
        match self.class_name.write() {
            Ok(mut current) => class_name.clone_into(&mut current),
            Err(_) => {
                tracing::warn!(class_name, "hotkeys overlay lock poisoned, class not applied");
            }
        }
    }
}

/// Extension points a documentation shell calls while laying out a page.
pub trait ShellExtensions {
    /// Banner above the page, if any.
    fn banner(&self) -> Option<String>;

    /// Footer below the page, if any.
    fn footer(&self) -> Option<String>;

    /// Sidebar header.
    fn header(&self) -> String;

    /// Class of the page root, reflecting the current theme.
    fn page_class(&self) -> &str;

    /// Markup of one navigation entry. Called once per section.
    fn render_nav_item(&self, section: &Section, default_props: NavMenuItemProps) -> String;

    /// Label of the "view source" link for a source file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewSourceError`] when no package can be derived from the
    /// path; the shell should omit the link.
    fn view_source_label(&self, file_name: &str) -> Result<String, ViewSourceError>;

    /// Called after a section's document is committed. Returns the number of
    /// elements changed.
    fn on_section_change(&self, document: &mut Document) -> usize;
}

/// Settings of the composer.
#[derive(Clone, Debug)]
pub struct ComposerOptions {
    /// Package scope prefix, e.g. `@scope/`.
    pub scope: String,
    /// Page class in dark mode.
    pub dark_class: String,
    /// Class wrapping checkbox inputs.
    pub checkbox_class: String,
    pub nav_classes: NavClasses,
    /// Site title shown in the header.
    pub title: String,
    pub banner: Option<Banner>,
    /// Footer copyright line.
    pub copyright: Option<String>,
}

impl Default for ComposerOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ComposerOptions {
    /// Options from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let site = &config.site_resolved;
        let banner = site
            .banner_href
            .as_ref()
            .zip(site.banner_text.as_ref())
            .map(|(href, text)| Banner {
                href: href.clone(),
                text: text.clone(),
            });
        Self {
            scope: config.packages.scope.clone(),
            dark_class: config.theme_resolved.dark_class.clone(),
            checkbox_class: config.classes.checkbox.clone(),
            nav_classes: NavClasses {
                menu_item: config.classes.menu_item.clone(),
                text_muted: config.classes.text_muted.clone(),
            },
            title: site.title.clone(),
            banner,
            copyright: site.copyright.clone(),
        }
    }
}

/// Top-level orchestrator of the documentation site.
pub struct DocumentationComposer {
    data: SiteData,
    store: ThemeStore,
    overlay: Arc<dyn OverlaySurface>,
    theme: ThemeState,
    renderer: NavItemRenderer,
    fixup: IndeterminateFixup,
    options: ComposerOptions,
}

impl DocumentationComposer {
    /// Create a composer, reading the initial theme from `store`.
    #[must_use]
    pub fn new(
        data: SiteData,
        store: ThemeStore,
        overlay: Arc<dyn OverlaySurface>,
        options: ComposerOptions,
    ) -> Self {
        let theme = store.get_theme();
        tracing::debug!(%theme, key = store.key(), "initial theme");
        let renderer =
            NavItemRenderer::new(options.scope.clone()).with_classes(options.nav_classes.clone());
        let fixup = IndeterminateFixup::new(options.checkbox_class.clone());
        Self {
            data,
            store,
            overlay,
            theme,
            renderer,
            fixup,
            options,
        }
    }

    /// Create a composer persisting the theme in the configured state directory.
    #[must_use]
    pub fn from_config(config: &Config, data: SiteData, overlay: Arc<dyn OverlaySurface>) -> Self {
        let prefs = Arc::new(FilePreferenceStore::new(
            config.theme_resolved.state_dir.clone(),
        ));
        let store = ThemeStore::with_key(prefs, config.theme_resolved.storage_key.clone());
        Self::new(data, store, overlay, ComposerOptions::from_config(config))
    }

    pub fn data(&self) -> &SiteData {
        &self.data
    }

    pub fn theme(&self) -> ThemeState {
        self.theme
    }

    /// Handle the dark theme switch.
    ///
    /// Persists the next theme, restyles the overlay, then updates the page
    /// class. The three happen within this call, so no caller can observe
    /// them out of step.
    pub fn toggle_dark(&mut self, use_dark: bool) {
        let next = ThemeState::from_dark(use_dark);
        self.store.set_theme(next);
        self.overlay
            .set_class_name(next.class_name(&self.options.dark_class));
        if next != self.theme {
            tracing::info!(from = %self.theme, to = %next, "theme changed");
        }
        self.theme = next;
    }

    /// Structured navigation entry for a section.
    pub fn nav_item(&self, section: &Section, default_props: NavMenuItemProps) -> RenderedNavItem {
        self.renderer.render(&NavRenderRequest {
            section,
            releases: &self.data.releases,
            default_props,
        })
    }
}

impl ShellExtensions for DocumentationComposer {
    fn banner(&self) -> Option<String> {
        self.options.banner.as_ref().map(render_banner)
    }

    fn footer(&self) -> Option<String> {
        self.options
            .copyright
            .as_deref()
            .map(|c| render_footer(c, &self.options.nav_classes.text_muted))
    }

    fn header(&self) -> String {
        render_header(
            &self.options.title,
            &self.data.versions,
            self.theme.is_dark(),
        )
    }

    fn page_class(&self) -> &str {
        self.theme.class_name(&self.options.dark_class)
    }

    fn render_nav_item(&self, section: &Section, default_props: NavMenuItemProps) -> String {
        self.renderer
            .to_html(&self.nav_item(section, default_props))
    }

    fn view_source_label(&self, file_name: &str) -> Result<String, ViewSourceError> {
        view_source_label(&self.options.scope, file_name)
    }

    fn on_section_change(&self, document: &mut Document) -> usize {
        self.fixup.apply(document)
    }
}
