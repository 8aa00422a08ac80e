//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "ormgen.toml")
    }
}

impl Manifest {
    /// Parse an ormgen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = read_source(path)?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse an ormgen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Read a manifest's raw text, reporting the path on failure.
pub(super) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    })
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename, manifest.generator.language);

    if let Some(ext) = &manifest.generator.extension {
        ctx.validate_extension(ext)?;
    }

    for entry in manifest.entries() {
        ctx.validate_name(entry.name, "table")?;

        let table_ctx = ctx.push(entry.name);
        table_ctx.validate_class_name(entry.name, &entry.qualified_name())?;
        for column in entry.table.columns.keys() {
            table_ctx.validate_name(column, "column")?;
        }
    }
    Ok(())
}
