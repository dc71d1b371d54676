//! CLI error types.

use mdc_config::ConfigError;
use mdc_renderer::RenderError;
use mdc_storage::StorageError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Storage(#[from] StorageError),

    #[error("{0}")]
    Validation(String),
}
