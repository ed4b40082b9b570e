//! Partition file writing.

use std::fs;
use std::path::{Path, PathBuf};

use order_validate::{Partition, Partitions};
use tracing::{debug, info};

use crate::csv_output::render_csv;
use crate::error::{OutputError, Result};
use crate::json_output::render_json;

/// Artifact format for both partitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Where and how partitions are written.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub output_dir: PathBuf,
}

impl OutputOptions {
    pub fn new(format: OutputFormat, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            format,
            output_dir: output_dir.into(),
        }
    }

    /// Paths the valid and invalid artifacts are written to.
    pub fn paths(&self) -> OutputPaths {
        let extension = self.format.extension();
        OutputPaths {
            valid: self.output_dir.join(format!("valid.{extension}")),
            invalid: self.output_dir.join(format!("invalid.{extension}")),
        }
    }
}

/// Written artifact locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub valid: PathBuf,
    pub invalid: PathBuf,
}

/// Renders one partition in the given format.
pub fn render_partition(partition: &Partition, format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Csv => render_csv(partition),
        OutputFormat::Json => render_json(partition),
    }
}

/// Writes both partitions, creating the output directory if needed.
///
/// Nothing is written unless both partitions render successfully.
pub fn write_partitions(partitions: &Partitions, options: &OutputOptions) -> Result<OutputPaths> {
    let valid = render_partition(&partitions.valid, options.format)?;
    let invalid = render_partition(&partitions.invalid, options.format)?;

    fs::create_dir_all(&options.output_dir).map_err(|source| OutputError::CreateDir {
        path: options.output_dir.clone(),
        source,
    })?;

    let paths = options.paths();
    write_file(&paths.valid, &valid)?;
    write_file(&paths.invalid, &invalid)?;
    info!(
        format = options.format.extension(),
        valid = %paths.valid.display(),
        invalid = %paths.invalid.display(),
        "partitions written"
    );
    Ok(paths)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}
