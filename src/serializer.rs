//! Common interface of the protein collection formats.

use crate::error::{ProteinError, Result};
use crate::json::ProjectSummaryJson;
use crate::protein::Protein;
use crate::tab::TabDelimitedText;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// A format that proteins can be read from and, optionally, written to.
pub trait ProteinSerializer {
    /// Read every protein from `reader`.
    fn deserialize<R: Read>(&self, reader: R) -> Result<Vec<Protein>>;

    /// Write `proteins` to `writer`.
    fn serialize<W: Write>(&self, writer: W, proteins: &[Protein]) -> Result<()>;

    /// Read every protein from the file at `path`.
    fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Protein>> {
        let file = File::open(path)?;
        self.deserialize(file)
    }

    /// Create (or truncate) the file at `path` and write `proteins` to it.
    fn write_file<P: AsRef<Path>>(&self, path: P, proteins: &[Protein]) -> Result<()> {
        let file = File::create(path)?;
        self.serialize(file, proteins)
    }
}

/// Selects one of the supported formats at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializerKind {
    /// Tab-delimited project table.
    Tab,
    /// Project summary JSON (read only).
    Json,
}

impl SerializerKind {
    /// Parse a format name.
    pub fn from_name(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tab" | "tsv" | "txt" => Ok(Self::Tab),
            "json" => Ok(Self::Json),
            other => Err(ProteinError::InvalidFormat(format!(
                "unknown format '{}', expected tab or json",
                other
            ))),
        }
    }

    /// Guess the format from a file extension; anything but `.json` is tab.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path.as_ref().extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Tab,
        }
    }

    /// Read every protein from `reader` in this format.
    pub fn deserialize<R: Read>(&self, reader: R) -> Result<Vec<Protein>> {
        match self {
            Self::Tab => TabDelimitedText::new().deserialize(reader),
            Self::Json => ProjectSummaryJson::new().deserialize(reader),
        }
    }

    /// Read every protein from the file at `path` in this format.
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Protein>> {
        match self {
            Self::Tab => TabDelimitedText::new().read_file(path),
            Self::Json => ProjectSummaryJson::new().read_file(path),
        }
    }
}
