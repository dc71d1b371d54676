//! `mdc check` command implementation.

use std::path::PathBuf;

use clap::Args;
use mdc_storage::{FsLineSource, LineSource};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to the markdown document.
    input: PathBuf,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CheckArgs {
    /// Execute the check command: run the full conversion but write
    /// nothing, so malformed input (an unterminated code fence) surfaces
    /// without touching the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the document can't be read or converted.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let source = FsLineSource::new(self.input.clone());
        let fragments = check(&source)?;

        output.success(&format!(
            "{}: ok ({fragments} fragments)",
            self.input.display()
        ));
        Ok(())
    }
}

/// Convert without writing and return the fragment count.
pub(crate) fn check(source: &dyn LineSource) -> Result<usize, CliError> {
    let lines = source.lines()?;
    let fragments = mdc_renderer::fragments(&lines)?;
    Ok(fragments.len())
}

#[cfg(test)]
mod tests {
    use mdc_storage::MockLineSource;

    use super::*;

    #[test]
    fn test_check_counts_fragments() {
        let source = MockLineSource::new().with_text("# T\n\nprose\n\n- a\n- b\n");
        assert_eq!(check(&source).unwrap(), 3);
    }

    #[test]
    fn test_check_reports_unterminated_fence() {
        let source = MockLineSource::new().with_text("```rust\nfn main() {}\n");
        let err = check(&source).unwrap_err();
        assert!(matches!(err, CliError::Render(_)));
    }

    #[test]
    fn test_check_empty_document_is_ok() {
        let source = MockLineSource::new();
        assert_eq!(check(&source).unwrap(), 0);
    }
}
