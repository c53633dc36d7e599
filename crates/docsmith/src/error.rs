//! CLI error types.

use docsmith_audit::AuditError;
use docsmith_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Audit(#[from] AuditError),

    #[error("{0} broken link(s) found")]
    BrokenLinks(usize),
}
