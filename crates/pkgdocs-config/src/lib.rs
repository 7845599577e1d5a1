//! Configuration management for pkgdocs.
//!
//! Parses `pkgdocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! Path values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.data`
//! - `theme.state_dir`

mod expand;

use pkgdocs_theme::DEFAULT_STORAGE_KEY;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site data file.
    pub data: Option<PathBuf>,
    /// Override theme state directory.
    pub state_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pkgdocs.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Package naming configuration.
    pub packages: PackagesConfig,
    /// Theme configuration (paths are relative strings from TOML).
    theme: ThemeConfigRaw,
    /// Style class vocabulary.
    pub classes: ClassesConfig,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved theme configuration (set after loading).
    #[serde(skip)]
    pub theme_resolved: ThemeConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw site configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    data: Option<String>,
    title: Option<String>,
    banner_href: Option<String>,
    banner_text: Option<String>,
    copyright: Option<String>,
}

/// Resolved site configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Site data file (sections, releases, versions).
    pub data: PathBuf,
    /// Title shown in the page header.
    pub title: String,
    /// Link target of the banner, if a banner is shown.
    pub banner_href: Option<String>,
    /// Banner text.
    pub banner_text: Option<String>,
    /// Footer copyright line; no footer when unset.
    pub copyright: Option<String>,
}

/// Package naming configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PackagesConfig {
    /// Scope prefix joined with a route to form a package name (e.g. `@scope/`).
    pub scope: String,
}

impl Default for PackagesConfig {
    fn default() -> Self {
        Self {
            scope: "@scope/".to_owned(),
        }
    }
}

/// Raw theme configuration as parsed from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeConfigRaw {
    storage_key: Option<String>,
    dark_class: Option<String>,
    state_dir: Option<String>,
}

/// Resolved theme configuration.
#[derive(Debug)]
pub struct ThemeConfig {
    /// Key the theme preference is stored under.
    pub storage_key: String,
    /// Page class applied in dark mode.
    pub dark_class: String,
    /// Directory holding persisted preferences.
    pub state_dir: PathBuf,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            dark_class: DEFAULT_DARK_CLASS.to_owned(),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
        }
    }
}

const DEFAULT_DARK_CLASS: &str = "docs-dark";
const DEFAULT_STATE_DIR: &str = ".pkgdocs";
const DEFAULT_DATA_FILE: &str = "site.json";
const DEFAULT_TITLE: &str = "Documentation";

/// Style class vocabulary used in rendered markup.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClassesConfig {
    /// Class of the element wrapping checkbox inputs.
    pub checkbox: String,
    /// Class of navigation menu item links.
    pub menu_item: String,
    /// Class for muted secondary text.
    pub text_muted: String,
}

impl Default for ClassesConfig {
    fn default() -> Self {
        Self {
            checkbox: "docs-checkbox".to_owned(),
            menu_item: "docs-menu-item".to_owned(),
            text_muted: "docs-text-muted".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.data`").
        field: String,
        /// Error message (e.g., "${`DOCS_DATA`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

/// Require a class name to be a single token.
fn require_class_token(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "{field} must be a single class name"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pkgdocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(data) = &settings.data {
            self.site_resolved.data.clone_from(data);
        }
        if let Some(state_dir) = &settings.state_dir {
            self.theme_resolved.state_dir.clone_from(state_dir);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfigRaw::default(),
            packages: PackagesConfig::default(),
            theme: ThemeConfigRaw::default(),
            classes: ClassesConfig::default(),
            site_resolved: SiteConfig {
                data: base.join(DEFAULT_DATA_FILE),
                title: DEFAULT_TITLE.to_owned(),
                banner_href: None,
                banner_text: None,
                copyright: None,
            },
            theme_resolved: ThemeConfig {
                state_dir: base.join(DEFAULT_STATE_DIR),
                ..ThemeConfig::default()
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        self.validate_packages()?;
        self.validate_theme()?;
        require_class_token(&self.classes.checkbox, "classes.checkbox")?;
        require_class_token(&self.classes.menu_item, "classes.menu_item")?;
        require_class_token(&self.classes.text_muted, "classes.text_muted")?;
        Ok(())
    }

    fn validate_site(&self) -> Result<(), ConfigError> {
        if let Some(ref href) = self.site_resolved.banner_href {
            require_http_url(href, "site.banner_href")?;
            if self.site_resolved.banner_text.is_none() {
                return Err(ConfigError::Validation(
                    "site.banner_href requires site.banner_text".to_owned(),
                ));
            }
        } else if self.site_resolved.banner_text.is_some() {
            return Err(ConfigError::Validation(
                "site.banner_text requires site.banner_href".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_packages(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.packages.scope, "packages.scope")?;
        if !self.packages.scope.ends_with('/') {
            return Err(ConfigError::Validation(
                "packages.scope must end with '/'".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_theme(&self) -> Result<(), ConfigError> {
        let key = &self.theme_resolved.storage_key;
        require_non_empty(key, "theme.storage_key")?;
        // The file backend uses the key as a file name.
        if key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(ConfigError::Validation(
                "theme.storage_key must be a plain file name".to_owned(),
            ));
        }
        require_class_token(&self.theme_resolved.dark_class, "theme.dark_class")
    }

    /// Expand environment variable references in path values.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref data) = self.site.data {
            self.site.data = Some(expand::expand_env(data, "site.data")?);
        }
        if let Some(ref state_dir) = self.theme.state_dir {
            self.theme.state_dir = Some(expand::expand_env(state_dir, "theme.state_dir")?);
        }
        Ok(())
    }

    /// Resolve raw values, joining relative paths onto the config directory.
    fn resolve(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            data: resolve(self.site.data.as_deref(), DEFAULT_DATA_FILE),
            title: self
                .site
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
            banner_href: self.site.banner_href.clone(),
            banner_text: self.site.banner_text.clone(),
            copyright: self.site.copyright.clone(),
        };

        self.theme_resolved = ThemeConfig {
            storage_key: self
                .theme
                .storage_key
                .clone()
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_owned()),
            dark_class: self
                .theme
                .dark_class
                .clone()
                .unwrap_or_else(|| DEFAULT_DARK_CLASS.to_owned()),
            state_dir: resolve(self.theme.state_dir.as_deref(), DEFAULT_STATE_DIR),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILENAME);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site_resolved.data, PathBuf::from("/test/site.json"));
        assert_eq!(config.site_resolved.title, "Documentation");
        assert_eq!(config.packages.scope, "@scope/");
        assert_eq!(config.theme_resolved.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(DEFAULT_STORAGE_KEY, "pkgdocs-theme");
        assert_eq!(config.theme_resolved.dark_class, "docs-dark");
        assert_eq!(
            config.theme_resolved.state_dir,
            PathBuf::from("/test/.pkgdocs")
        );
        assert_eq!(config.classes.checkbox, "docs-checkbox");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.packages.scope, "@scope/");
        assert_eq!(config.classes.menu_item, "docs-menu-item");
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            r#"
[site]
data = "data/site.yaml"
title = "Packages"
copyright = "2024 Example Inc."

[packages]
scope = "@example/"

[theme]
storage_key = "example-docs-theme"
dark_class = "bp-dark"
state_dir = "state"
"#,
        );

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.site_resolved.data, tmp.path().join("data/site.yaml"));
        assert_eq!(config.site_resolved.title, "Packages");
        assert_eq!(
            config.site_resolved.copyright.as_deref(),
            Some("2024 Example Inc.")
        );
        assert_eq!(config.packages.scope, "@example/");
        assert_eq!(config.theme_resolved.storage_key, "example-docs-theme");
        assert_eq!(config.theme_resolved.dark_class, "bp-dark");
        assert_eq!(config.theme_resolved.state_dir, tmp.path().join("state"));
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_cli_settings_override_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(tmp.path(), "[site]\ndata = \"a.json\"\n");
        let settings = CliSettings {
            data: Some(PathBuf::from("/override/b.json")),
            state_dir: Some(PathBuf::from("/override/state")),
        };

        let config = Config::load(Some(&path), Some(&settings)).unwrap();
        assert_eq!(config.site_resolved.data, PathBuf::from("/override/b.json"));
        assert_eq!(
            config.theme_resolved.state_dir,
            PathBuf::from("/override/state")
        );
    }

    #[test]
    fn test_missing_explicit_config() {
        let err = Config::load(Some(Path::new("/nonexistent/pkgdocs.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(tmp.path(), "[site\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_scope_must_end_with_slash() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(tmp.path(), "[packages]\nscope = \"@scope\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("packages.scope"));
    }

    #[test]
    fn test_storage_key_must_be_file_name() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(tmp.path(), "[theme]\nstorage_key = \"../escape\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("theme.storage_key"));
    }

    #[test]
    fn test_dark_class_single_token() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(tmp.path(), "[theme]\ndark_class = \"a b\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("theme.dark_class"));
    }

    #[test]
    fn test_banner_href_requires_http() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            "[site]\nbanner_href = \"ftp://x\"\nbanner_text = \"Old docs\"\n",
        );
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("site.banner_href"));
    }

    #[test]
    fn test_banner_href_requires_text() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(tmp.path(), "[site]\nbanner_href = \"https://x\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(err.to_string().contains("banner_text"));
    }

    #[test]
    fn test_banner_text_requires_href() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(tmp.path(), "[site]\nbanner_text = \"Old docs\"\n");
        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.banner_text requires site.banner_href"));
    }

    #[test]
    fn test_state_dir_env_expansion() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("PKGDOCS_CONFIG_TEST_STATE", "/tmp/pkgdocs-state");
        }
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            "[theme]\nstate_dir = \"${PKGDOCS_CONFIG_TEST_STATE}\"\n",
        );
        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(
            config.theme_resolved.state_dir,
            PathBuf::from("/tmp/pkgdocs-state")
        );
        unsafe {
            std::env::remove_var("PKGDOCS_CONFIG_TEST_STATE");
        }
    }
}
