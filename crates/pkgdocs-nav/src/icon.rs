//! Icons shown next to package roots.

/// Icon name for a package route. Unknown packages get a generic cube.
pub fn nav_icon(route: &str) -> &'static str {
    match route {
        "core" => "layers",
        "datetime" => "calendar",
        "docs-theme" => "manual",
        "icons" => "media",
        "labs" => "lab-test",
        "select" => "select",
        "table" => "th",
        "timezone" => "globe",
        _ => "cube",
    }
}
