use std::path::{Path, PathBuf};

use super::{Manifest, parse::read_source};
use crate::Result;

/// An `ormgen.toml` on disk: where it lives, what it says, and what it parses to.
///
/// Diagnostics render against the raw text, so it is kept next to the
/// parsed manifest.
pub struct OrmToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl OrmToml {
    /// Read and validate the manifest at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_source(path)?;
        let manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
