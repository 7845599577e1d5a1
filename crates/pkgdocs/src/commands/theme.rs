//! `pkgdocs theme` subcommand group.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use pkgdocs_config::{CliSettings, Config};
use pkgdocs_theme::{FilePreferenceStore, ThemeState, ThemeStore};

use crate::error::CliError;
use crate::output::Output;

/// Theme preference commands.
#[derive(Subcommand)]
pub(crate) enum ThemeCommand {
    /// Print the persisted theme.
    Show(StoreArgs),
    /// Persist a theme.
    Set(SetArgs),
    /// Switch between light and dark.
    Toggle(StoreArgs),
}

/// Location of the theme preference.
#[derive(Args)]
pub(crate) struct StoreArgs {
    /// Path to configuration file (default: auto-discover pkgdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme state directory (overrides config).
    #[arg(long, env = "PKGDOCS_STATE_DIR")]
    state_dir: Option<PathBuf>,
}

/// Arguments for `theme set`.
#[derive(Args)]
pub(crate) struct SetArgs {
    /// Theme to persist: light or dark.
    theme: ThemeState,

    #[command(flatten)]
    store: StoreArgs,
}

impl StoreArgs {
    fn open(&self) -> Result<ThemeStore, CliError> {
        let cli_settings = CliSettings {
            state_dir: self.state_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let prefs = Arc::new(FilePreferenceStore::new(
            config.theme_resolved.state_dir.clone(),
        ));
        Ok(ThemeStore::with_key(
            prefs,
            config.theme_resolved.storage_key.clone(),
        ))
    }
}

impl ThemeCommand {
    /// Execute the theme subcommand.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        match self {
            Self::Show(args) => {
                let store = args.open()?;
                Output::result(store.get_theme().as_str())?;
            }
            Self::Set(args) => {
                let store = args.store.open()?;
                set(&store, args.theme);
            }
            Self::Toggle(args) => {
                let store = args.open()?;
                set(&store, store.get_theme().toggled());
            }
        }
        Ok(())
    }
}

fn set(store: &ThemeStore, theme: ThemeState) {
    store.set_theme(theme);
    tracing::info!(%theme, key = store.key(), "theme persisted");
    Output::new().success(&format!("Theme set to {theme}"));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn store_args(dir: &std::path::Path) -> StoreArgs {
        std::fs::write(dir.join("pkgdocs.toml"), "[theme]\nstate_dir = \"state\"\n").unwrap();
        StoreArgs {
            config: Some(dir.join("pkgdocs.toml")),
            state_dir: None,
        }
    }

    #[test]
    fn test_set_then_toggle() {
        let tmp = tempfile::TempDir::new().unwrap();

        ThemeCommand::Set(SetArgs {
            theme: ThemeState::Dark,
            store: store_args(tmp.path()),
        })
        .execute()
        .unwrap();
        assert_eq!(
            store_args(tmp.path()).open().unwrap().get_theme(),
            ThemeState::Dark
        );

        ThemeCommand::Toggle(store_args(tmp.path()))
            .execute()
            .unwrap();
        let stored = std::fs::read_to_string(tmp.path().join("state/pkgdocs-theme")).unwrap();
        assert_eq!(stored, "light");
    }

    #[test]
    fn test_state_dir_override() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mut args = store_args(tmp.path());
        args.state_dir = Some(tmp.path().join("elsewhere"));

        args.open().unwrap().set_theme(ThemeState::Dark);

        assert!(tmp.path().join("elsewhere/pkgdocs-theme").exists());
        assert!(!tmp.path().join("state").exists());
    }
}
