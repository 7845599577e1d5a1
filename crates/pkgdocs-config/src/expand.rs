//! `${VAR}` expansion for path-like configuration values.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// Bare `$VAR` is left alone so values containing a literal dollar sign
/// survive unchanged. `field` names the config key for error messages.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar(var.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that was referenced but not set.
struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_path_unchanged() {
        let result = expand_env(".pkgdocs/state", "theme.state_dir").unwrap();
        assert_eq!(result, ".pkgdocs/state");
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::set_var("PKGDOCS_TEST_STATE_HOME", "/var/lib/docs");
        }
        let result = expand_env("${PKGDOCS_TEST_STATE_HOME}/theme", "theme.state_dir").unwrap();
        assert_eq!(result, "/var/lib/docs/theme");
        unsafe {
            std::env::remove_var("PKGDOCS_TEST_STATE_HOME");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("PKGDOCS_TEST_UNSET_DATA");
        }
        let result = expand_env("${PKGDOCS_TEST_UNSET_DATA:-site.yaml}", "site.data").unwrap();
        assert_eq!(result, "site.yaml");
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("PKGDOCS_TEST_MISSING");
        }
        let err = expand_env("${PKGDOCS_TEST_MISSING}", "site.data").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        let message = err.to_string();
        assert!(message.contains("PKGDOCS_TEST_MISSING"));
        assert!(message.contains("site.data"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        let result = expand_env("$HOME/docs", "site.data").unwrap();
        assert_eq!(result, "$HOME/docs");
    }
}
