//! CLI error types.

use pkgdocs_config::ConfigError;
use pkgdocs_site::{ShellError, SiteDataError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    SiteData(#[from] SiteDataError),

    #[error("{0}")]
    Shell(#[from] ShellError),
}
