//! Loading and saving manifest documents
//!
//! A manifest is held as a full `toml::Value` tree so that keys the tool
//! never touches survive the load/save round trip. Comments and formatting
//! are not preserved; key order is.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use toml::Value;

use crate::error::{Error, Result};

/// A parsed manifest document, bound to the path it was loaded from.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    document: Value,
}

impl Manifest {
    /// Load and parse the manifest at `path`.
    ///
    /// Returns [`Error::NotFound`] if the file does not exist and
    /// [`Error::Parse`] if the content is not well-formed TOML. No schema
    /// validation is performed here.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                Error::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                Error::Io(err)
            }
        })?;
        let document: Value = toml::from_str(&raw)?;
        tracing::debug!("Loaded manifest from {}", path.display());

        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }

    /// Serialize the document and overwrite the file it was loaded from.
    ///
    /// The write is in place; there is no temp-file-and-rename step, so a
    /// failure mid-write can leave a truncated manifest.
    pub fn save(&self) -> Result<()> {
        let formatted = toml::to_string_pretty(&self.document)?;
        fs::write(&self.path, formatted)?;
        tracing::debug!("Wrote manifest to {}", self.path.display());

        Ok(())
    }

    /// Path this manifest was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The underlying TOML tree.
    pub fn document(&self) -> &Value {
        &self.document
    }

    pub(crate) fn document_mut(&mut self) -> &mut Value {
        &mut self.document
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.document, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
        assert!(!path.exists(), "load must not create the file");
    }

    #[test]
    fn load_reports_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[workspace\nmembers = [").unwrap();

        let err = Manifest::load(&path).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn display_renders_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        fs::write(&path, "[workspace]\nmembers = [\"a\"]\n").unwrap();

        let manifest = Manifest::load(&path).unwrap();
        let rendered = manifest.to_string();
        assert!(rendered.contains("[workspace]"));
        assert!(rendered.contains("\"a\""));
    }
}
