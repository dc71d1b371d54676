//! `mdc convert` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use mdc_config::{CliSettings, Config};
use mdc_storage::{DocumentSink, FsDocumentSink, FsLineSource, LineSource};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the convert command.
#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Path to the markdown document.
    input: PathBuf,

    /// Destination path for the HTML document (default: input name with
    /// `.html` inside the configured output directory).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the configured output directory.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document can't be read, converted, or
    /// written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir.clone(),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let input = resolve_input(&self.input, &config);
        let destination = match self.output {
            Some(path) => path,
            None => default_destination(&input, &config)?,
        };

        output.info(&format!("Converting {}...", input.display()));
        tracing::info!(
            input = %input.display(),
            destination = %destination.display(),
            "converting document"
        );

        let source = FsLineSource::new(input);
        let sink = FsDocumentSink::new(destination.clone());
        run(&source, &sink)?;

        output.success(&format!("Wrote {}", destination.display()));
        Ok(())
    }
}

/// Drive one document from source to sink through the conversion engine.
pub(crate) fn run(source: &dyn LineSource, sink: &dyn DocumentSink) -> Result<(), CliError> {
    let lines = source.lines()?;
    let html = mdc_renderer::convert(&lines)?;
    sink.write(&html)?;
    Ok(())
}

/// Resolve a relative input path against the configured source directory.
fn resolve_input(input: &Path, config: &Config) -> PathBuf {
    if input.is_absolute() {
        input.to_path_buf()
    } else {
        config.convert_resolved.source_dir.join(input)
    }
}

/// Default destination: the input's file name with an `.html` extension,
/// inside the configured output directory.
fn default_destination(input: &Path, config: &Config) -> Result<PathBuf, CliError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| CliError::Validation(format!("no file name in {}", input.display())))?;
    let mut name = stem.to_os_string();
    name.push(".html");
    Ok(config.convert_resolved.output_dir.join(name))
}
