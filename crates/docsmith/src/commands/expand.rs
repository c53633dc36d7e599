//! `docsmith expand` command implementation.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use docsmith_audit::expand_markdown;
use docsmith_config::{CliSettings, Config};
use docsmith_snippets::SnippetResolver;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the expand command.
#[derive(Args)]
pub(crate) struct ExpandArgs {
    /// Markdown files to expand.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Snippet base directory (overrides config).
    #[arg(short, long)]
    base_dir: Option<PathBuf>,

    /// Rewrite files in place instead of printing to stdout.
    #[arg(short, long)]
    write: bool,

    /// Path to configuration file (default: auto-discover docsmith.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl ExpandArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            snippet_base_dir: self.base_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let mut resolver = SnippetResolver::new(&config.snippet_base_dir);

        for file in &self.files {
            let markdown = fs::read_to_string(file)?;
            match expand_markdown(&mut resolver, &markdown) {
                Some(expanded) if self.write => {
                    fs::write(file, expanded)?;
                    output.success(&format!("Expanded {}", file.display()));
                }
                Some(expanded) => print_document(&expanded)?,
                None if self.write => {
                    output.info(&format!("No references in {}", file.display()));
                }
                None => print_document(&markdown)?,
            }
        }

        for warning in resolver.warnings() {
            output.warning(warning);
        }

        Ok(())
    }
}

/// Write expanded markdown to stdout; that is the command's result, not a
/// log line, so it bypasses the stderr formatter.
fn print_document(content: &str) -> Result<(), CliError> {
    std::io::stdout().write_all(content.as_bytes())?;
    Ok(())
}
