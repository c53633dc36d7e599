//! `docsmith check-links` command implementation.

use std::path::PathBuf;

use clap::Args;
use docsmith_audit::{check_links, scan_docs, slug_set};
use docsmith_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check-links command.
#[derive(Args)]
pub(crate) struct CheckLinksArgs {
    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover docsmith.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl CheckLinksArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        output.info(&format!("Source: {}", config.source_dir.display()));

        let docs = scan_docs(&config.source_dir)?;
        let slugs = slug_set(&docs);
        let broken = check_links(&docs, &slugs)?;

        output.info(&format!(
            "Checked {} document(s) against {} slug(s)",
            docs.len(),
            slugs.len()
        ));

        if broken.is_empty() {
            output.success("No broken links found");
            return Ok(());
        }

        for link in &broken {
            output.warning(&format!(
                "{}: {} -> {}",
                link.file.display(),
                link.href,
                link.resolved
            ));
        }
        Err(CliError::BrokenLinks(broken.len()))
    }
}
