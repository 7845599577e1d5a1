//! Release badges for package roots.

use crate::PackageInfo;

/// Find the release whose name is `scope` followed by `route`.
///
/// Returns the first exact match, or `None` if the package has no release.
pub fn resolve_badge<'a>(
    scope: &str,
    route: &str,
    releases: &'a [PackageInfo],
) -> Option<&'a PackageInfo> {
    releases
        .iter()
        .find(|p| p.name.strip_prefix(scope) == Some(route))
}
