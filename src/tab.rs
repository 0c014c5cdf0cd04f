//! Streaming tab-delimited protein decoder and encoder.
//!
//! One protein per line, twelve tab-separated columns, no header, no
//! quoting. Lines may end with `\n`, `\r` or `\r\n`; output always uses `\n`.

use crate::error::Result;
use crate::protein::Protein;
use crate::serializer::ProteinSerializer;
use crate::streaming::buffers::{read_window_size, DEFAULT_READ_WINDOW};
use crate::streaming::{
    parse_protein, should_skip_line, split_lines, CarryoverBuffer, ProteinWriter,
};
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

/// Statistics from a decode pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodeStats {
    /// Terminated lines seen, blank ones included. A `\r\n` pair counts
    /// once, even when a window boundary falls between its two bytes.
    pub lines: usize,
    /// Valid proteins produced.
    pub records: usize,
    /// Lines skipped because a column failed to parse.
    pub malformed: usize,
    /// Lines that parsed but failed the validity check.
    pub invalid: usize,
    /// Bytes of an unterminated final line that were dropped.
    pub truncated_bytes: usize,
}

impl fmt::Display for DecodeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lines: {}, Records: {}, Malformed: {}, Invalid: {}, Truncated bytes: {}",
            self.lines, self.records, self.malformed, self.invalid, self.truncated_bytes
        )
    }
}

/// Decoder reading proteins through a fixed-size window.
///
/// Each window is split into lines in place. A line cut off by the end of a
/// window is copied into a [`CarryoverBuffer`] and completed by the first
/// terminated line of a following window. A fragment still pending at end
/// of stream (no final terminator) is dropped.
#[derive(Debug, Clone, Copy)]
pub struct TabDecoder {
    window: usize,
}

impl Default for TabDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TabDecoder {
    pub fn new() -> Self {
        Self::with_window(DEFAULT_READ_WINDOW)
    }

    /// Create a decoder with a custom read window (at least one byte).
    pub fn with_window(window: usize) -> Self {
        Self {
            window: read_window_size(window),
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Read all valid proteins from `reader`.
    pub fn decode<R: Read>(&self, reader: R) -> Result<Vec<Protein>> {
        self.decode_with_stats(reader).map(|(proteins, _)| proteins)
    }

    /// Read all valid proteins from `reader`, also returning statistics.
    pub fn decode_with_stats<R: Read>(
        &self,
        mut reader: R,
    ) -> Result<(Vec<Protein>, DecodeStats)> {
        let mut buffer = vec![0u8; self.window];
        let mut carry = CarryoverBuffer::new();
        let mut proteins = Vec::new();
        let mut stats = DecodeStats::default();
        let mut split_crlf = false;

        loop {
            let bytes_read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            log::trace!("read window of {} bytes", bytes_read);

            // Only the filled part of the window holds data from this read.
            let mut lines = split_lines(&buffer[..bytes_read]).peekable();

            // The `\n` half of a `\r\n` pair cut by the previous window.
            if split_crlf
                && lines
                    .peek()
                    .is_some_and(|e| e.line.is_empty() && e.separator == b"\n")
            {
                lines.next();
            }
            split_crlf = false;

            for entry in lines {
                if entry.has_separator() {
                    carry.complete(entry.line, |line| accept_line(line, &mut stats, &mut proteins));
                    split_crlf = entry.separator == b"\r";
                } else {
                    carry.hold(entry.line);
                    split_crlf = false;
                }
            }
        }

        stats.truncated_bytes = carry.discard();
        if stats.truncated_bytes > 0 {
            log::debug!(
                "dropping {} bytes of unterminated final line",
                stats.truncated_bytes
            );
        }
        log::debug!("decoded proteins: {}", stats);

        Ok((proteins, stats))
    }
}

fn accept_line(line: &[u8], stats: &mut DecodeStats, proteins: &mut Vec<Protein>) {
    stats.lines += 1;
    if should_skip_line(line) {
        return;
    }

    match parse_protein(line) {
        Ok(protein) if protein.is_valid() => {
            stats.records += 1;
            proteins.push(protein);
        }
        Ok(protein) => {
            stats.invalid += 1;
            log::debug!(
                "skipping invalid protein {} at line {}",
                protein.project_number,
                stats.lines
            );
        }
        Err(e) => {
            stats.malformed += 1;
            log::warn!("skipping malformed line {}: {}", stats.lines, e);
        }
    }
}

/// Write proteins as tab-delimited lines in ascending project number order.
///
/// Text is written verbatim: tabs or line breaks inside a text field are
/// not escaped.
pub fn write_proteins<'a, W, I>(writer: W, proteins: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Protein>,
{
    let mut sorted: Vec<&Protein> = proteins.into_iter().collect();
    sorted.sort_by_key(|p| p.project_number);

    let mut out = ProteinWriter::new(writer);
    for protein in sorted {
        out.write_protein(protein)?;
    }
    out.flush()
}

/// Read all valid proteins from a tab-delimited file.
pub fn read_proteins<P: AsRef<Path>>(path: P) -> Result<Vec<Protein>> {
    let file = File::open(path)?;
    TabDecoder::new().decode(file)
}

/// Parse proteins from a string (useful for testing).
pub fn parse_proteins(content: &str) -> Result<Vec<Protein>> {
    TabDecoder::new().decode(content.as_bytes())
}

/// The tab-delimited project table format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabDelimitedText {
    decoder: TabDecoder,
}

impl TabDelimitedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_decoder(decoder: TabDecoder) -> Self {
        Self { decoder }
    }
}

impl ProteinSerializer for TabDelimitedText {
    fn deserialize<R: Read>(&self, reader: R) -> Result<Vec<Protein>> {
        self.decoder.decode(reader)
    }

    fn serialize<W: Write>(&self, writer: W, proteins: &[Protein]) -> Result<()> {
        write_proteins(writer, proteins)
    }
}
