//! Composes the per-run output path and owns the open file handle that
//! successive PGM documents are appended to.
//!
//! `<dir>/<timestamp>_<driver>.pgm` where `<timestamp>` is UTC, ISO 8601.

use std::fs::{File, OpenOptions};
use std::path::PathBuf;

use chrono::Utc;

use crate::error::{Result, SpectrelError};

/// Environment variable overriding the default output directory.
pub const DATA_DIR_ENV_VAR: &str = "SPECTREL_DATA_DIR_PATH";

/// Resolve the output directory: `$SPECTREL_DATA_DIR_PATH` if set, else `.`.
pub fn resolve_output_dir(cli_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = cli_dir {
        return PathBuf::from(dir);
    }
    std::env::var(DATA_DIR_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// A supported output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pgm,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pgm => "pgm",
        }
    }
}

/// The open output file for one capture run. Successive PGM documents are
/// appended via [`OutputFile::writer`].
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    /// Create `dir` if it does not exist, then open
    /// `<dir>/<timestamp>_<driver>.<ext>` for writing.
    pub fn create(dir: &std::path::Path, driver: &str, format: OutputFormat) -> Result<Self> {
        std::fs::create_dir_all(dir).map_err(SpectrelError::Io)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        let file_name = format!("{timestamp}_{driver}.{}", format.extension());
        let path = dir.join(file_name);

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&path)
            .map_err(SpectrelError::Io)?;

        Ok(Self { path, file })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Mutable access to the underlying file for appending a PGM document.
    pub fn writer(&mut self) -> &mut File {
        &mut self.file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_output_dir_prefers_cli_flag() {
        assert_eq!(resolve_output_dir(Some("/tmp/explicit")), PathBuf::from("/tmp/explicit"));
    }

    #[test]
    fn resolve_output_dir_falls_back_to_dot() {
        // SAFETY: test-only, single-threaded env mutation scoped to this test.
        unsafe {
            std::env::remove_var(DATA_DIR_ENV_VAR);
        }
        assert_eq!(resolve_output_dir(None), PathBuf::from("."));
    }

    #[test]
    fn create_composes_timestamped_driver_named_file() {
        let tmp = tempfile::tempdir().unwrap();
        let output = OutputFile::create(tmp.path(), "rtlsdr", OutputFormat::Pgm).unwrap();
        let name = output.path().file_name().unwrap().to_string_lossy();
        assert!(name.ends_with("_rtlsdr.pgm"));
        assert!(output.path().starts_with(tmp.path()));
    }

    #[test]
    fn create_makes_missing_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let output = OutputFile::create(&nested, "hackrf", OutputFormat::Pgm).unwrap();
        assert!(output.path().exists());
    }
}
