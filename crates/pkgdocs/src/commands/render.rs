//! `pkgdocs render` command implementation.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use pkgdocs_config::{CliSettings, Config};
use pkgdocs_site::{DocumentationComposer, HotkeysOverlay, SiteData, StaticShell};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover pkgdocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site data file, JSON or YAML (overrides config).
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Theme state directory (overrides config).
    #[arg(long, env = "PKGDOCS_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Route to render (default: the site's default page).
    #[arg(short, long)]
    route: Option<String>,

    /// XHTML fragment placed in the page body.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Output file (default: stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            data: self.data.clone(),
            state_dir: self.state_dir.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!(
            "Site data: {}",
            config.site_resolved.data.display()
        ));
        let data = SiteData::load(&config.site_resolved.data)?;
        let content = match &self.content {
            Some(path) => std::fs::read_to_string(path)?,
            None => String::new(),
        };

        let composer =
            DocumentationComposer::from_config(&config, data, Arc::new(HotkeysOverlay::new()));
        let page = StaticShell::new(composer.data()).render(
            &composer,
            self.route.as_deref(),
            &content,
        )?;
        tracing::info!(
            route = %page.route,
            theme = %composer.theme(),
            fixups = page.fixups,
            "rendered page"
        );

        let html = page.to_html_document();
        match &self.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, html)?;
                output.success(&format!(
                    "Rendered '{}' to {}",
                    page.route,
                    path.display()
                ));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
