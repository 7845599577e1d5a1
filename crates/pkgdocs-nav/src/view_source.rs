//! Labels for "view source" links.

/// A file path with no package directory after its first `/`.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("cannot derive package from file name '{file_name}': no directory after the first '/'")]
pub struct ViewSourceError {
    pub file_name: String,
}

/// Label a source file by the package directory it lives in.
///
/// `packages/core/src/foo.tsx` with scope `@scope/` becomes `@scope/core`.
///
/// # Errors
///
/// Returns [`ViewSourceError`] when `file_name` has no `/`, or nothing
/// between its first and second `/`.
pub fn view_source_label(scope: &str, file_name: &str) -> Result<String, ViewSourceError> {
    file_name
        .split('/')
        .nth(1)
        .filter(|dir| !dir.is_empty())
        .map(|dir| format!("{scope}{dir}"))
        .ok_or_else(|| ViewSourceError {
            file_name: file_name.to_owned(),
        })
}
