//! Site data supplied by external providers.
//!
//! The section tree and release lists arrive already resolved, as a JSON or
//! YAML file:
//!
//! ```yaml
//! default_page_id: core
//! sections:
//!   - route: core
//!     title: Core
//!     level: 1
//!     children:
//!       - { route: core/components, title: Components, level: 2, kind: heading }
//! releases:
//!   - { name: "@scope/core", version: 3.0.0, url: https://example.com/core }
//! versions:
//!   - { name: "@scope/core", version: 2.0.0, url: https://example.com/v2 }
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use pkgdocs_nav::{PackageInfo, Section};
use serde::{Deserialize, Serialize};

/// Error loading site data.
#[derive(Debug, thiserror::Error)]
pub enum SiteDataError {
    /// I/O error.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// JSON parse error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// YAML parse error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// File extension is neither JSON nor YAML.
    #[error("Unsupported site data format: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Two sections share a route.
    #[error("Duplicate route '{0}' in section tree")]
    DuplicateRoute(String),
    /// `default_page_id` names no section.
    #[error("Default page '{0}' not found in section tree")]
    UnknownDefaultPage(String),
}

/// Inputs of the documentation composer, read-only once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteData {
    /// Top-level sections, usually one per package.
    pub sections: Vec<Section>,
    /// Current release of each package, shown as nav badges.
    #[serde(default)]
    pub releases: Vec<PackageInfo>,
    /// Previous documentation versions, listed in the header.
    #[serde(default)]
    pub versions: Vec<PackageInfo>,
    /// Route shown when none is requested. Empty means the first section.
    #[serde(default)]
    pub default_page_id: String,
    /// Content tag name to the shell renderer that handles it.
    ///
    /// Carried for the host only; [`StaticShell`](crate::StaticShell) places
    /// content as given and never consults it.
    #[serde(default)]
    pub tag_renderers: BTreeMap<String, String>,
    /// Route to the source file it was generated from.
    #[serde(default)]
    pub sources: BTreeMap<String, String>,
}

impl SiteData {
    /// Load site data from a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns [`SiteDataError`] if the file cannot be read or parsed, or if
    /// the section tree is invalid.
    pub fn load(path: &Path) -> Result<Self, SiteDataError> {
        let extension = path.extension().and_then(|e| e.to_str());
        let parse: fn(&str) -> Result<Self, SiteDataError> = match extension {
            Some("json") => Self::from_json,
            Some("yaml" | "yml") => Self::from_yaml,
            _ => return Err(SiteDataError::UnsupportedFormat(path.to_path_buf())),
        };
        let content = std::fs::read_to_string(path).map_err(|source| SiteDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            sections = data.sections.len(),
            releases = data.releases.len(),
            "loaded site data"
        );
        Ok(data)
    }

    /// Parse and validate JSON site data.
    ///
    /// # Errors
    ///
    /// Returns [`SiteDataError`] on parse or validation failure.
    pub fn from_json(content: &str) -> Result<Self, SiteDataError> {
        let data: Self = serde_json::from_str(content)?;
        data.validate()?;
        Ok(data)
    }

    /// Parse and validate YAML site data.
    ///
    /// # Errors
    ///
    /// Returns [`SiteDataError`] on parse or validation failure.
    pub fn from_yaml(content: &str) -> Result<Self, SiteDataError> {
        let data: Self = serde_yaml::from_str(content)?;
        data.validate()?;
        Ok(data)
    }

    /// Check route uniqueness and the default page.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), SiteDataError> {
        let mut seen = HashSet::new();
        let mut duplicate = None;
        for section in &self.sections {
            section.walk(&mut |s| {
                if !seen.insert(s.route.as_str()) && duplicate.is_none() {
                    duplicate = Some(s.route.clone());
                }
            });
        }
        if let Some(route) = duplicate {
            return Err(SiteDataError::DuplicateRoute(route));
        }
        if !self.default_page_id.is_empty() && !seen.contains(self.default_page_id.as_str()) {
            return Err(SiteDataError::UnknownDefaultPage(
                self.default_page_id.clone(),
            ));
        }
        Ok(())
    }

    /// Find a section anywhere in the tree.
    pub fn find(&self, route: &str) -> Option<&Section> {
        fn search<'a>(sections: &'a [Section], route: &str) -> Option<&'a Section> {
            sections.iter().find_map(|s| {
                if s.route == route {
                    Some(s)
                } else {
                    search(&s.children, route)
                }
            })
        }
        search(&self.sections, route)
    }

    /// Name of the renderer a host registered for a content tag.
    pub fn tag_renderer(&self, tag: &str) -> Option<&str> {
        self.tag_renderers.get(tag).map(String::as_str)
    }

    /// Route of the default page.
    pub fn default_route(&self) -> Option<&str> {
        if self.default_page_id.is_empty() {
            self.sections.first().map(|s| s.route.as_str())
        } else {
            Some(&self.default_page_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const YAML: &str = r#"
default_page_id: core/colors
sections:
  - route: core
    title: Core
    level: 1
    children:
      - { route: core/colors, title: Colors, level: 2 }
      - { route: core/components, title: Components, level: 2, kind: heading }
  - route: table
    title: Table
    level: 1
releases:
  - { name: "@scope/core", version: 3.0.0, url: "https://example.com/core" }
versions:
  - { name: "@scope/core", version: 2.0.0, url: "https://example.com/v2" }
sources:
  core/colors: packages/core/src/colors.ts
tag_renderers:
  interface: TypescriptExample
"#;

    #[test]
    fn test_from_yaml() {
        let data = SiteData::from_yaml(YAML).unwrap();
        assert_eq!(data.sections.len(), 2);
        assert_eq!(data.releases[0].version, "3.0.0");
        assert_eq!(data.versions[0].url, "https://example.com/v2");
        assert_eq!(data.default_route(), Some("core/colors"));
        assert_eq!(
            data.sources.get("core/colors").map(String::as_str),
            Some("packages/core/src/colors.ts")
        );
    }

    #[test]
    fn test_from_json_minimal() {
        let data =
            SiteData::from_json(r#"{"sections": [{"route": "core", "title": "Core", "level": 1}]}"#)
                .unwrap();
        assert!(data.releases.is_empty());
        assert_eq!(data.default_route(), Some("core"));
    }

    #[test]
    fn test_tag_renderer_lookup() {
        let data = SiteData::from_yaml(YAML).unwrap();
        assert_eq!(data.tag_renderer("interface"), Some("TypescriptExample"));
        assert_eq!(data.tag_renderer("method"), None);

        let minimal =
            SiteData::from_json(r#"{"sections": [{"route": "core", "title": "Core", "level": 1}]}"#)
                .unwrap();
        assert!(minimal.tag_renderers.is_empty());
    }

    #[test]
    fn test_find_nested() {
        let data = SiteData::from_yaml(YAML).unwrap();
        assert_eq!(data.find("core/components").unwrap().title, "Components");
        assert!(data.find("grid").is_none());
    }

    #[test]
    fn test_duplicate_route() {
        let json = r#"{"sections": [
            {"route": "core", "title": "Core", "level": 1,
             "children": [{"route": "core", "title": "Again", "level": 2}]}
        ]}"#;
        let err = SiteData::from_json(json).unwrap_err();
        assert!(matches!(err, SiteDataError::DuplicateRoute(ref r) if r == "core"));
    }

    #[test]
    fn test_unknown_default_page() {
        let json = r#"{"default_page_id": "grid", "sections": [{"route": "core", "title": "Core", "level": 1}]}"#;
        let err = SiteData::from_json(json).unwrap_err();
        assert!(matches!(err, SiteDataError::UnknownDefaultPage(_)));
    }

    #[test]
    fn test_load_by_extension() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("site.yml");
        std::fs::write(&path, YAML).unwrap();

        let data = SiteData::load(&path).unwrap();
        assert_eq!(data.sections[1].route, "table");
    }

    #[test]
    fn test_load_unsupported_extension() {
        let err = SiteData::load(Path::new("site.toml")).unwrap_err();
        assert!(matches!(err, SiteDataError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteData::load(Path::new("/nonexistent/site.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/site.json"));
    }
}
