//! Buffered output of tab-delimited protein lines.
//!
//! Uses itoa for integer formatting and ryu for float formatting
//! to avoid allocation per line.

use super::buffers::DEFAULT_OUTPUT_BUFFER;
use crate::error::ProteinError;
use crate::protein::Protein;
use std::io::{BufWriter, Write};

/// Format a float in shortest round-trip form, dropping a `.0` suffix so
/// whole values read `3` rather than `3.0`.
#[inline]
pub fn format_f64(buf: &mut ryu::Buffer, value: f64) -> &str {
    let s = buf.format(value);
    s.strip_suffix(".0").unwrap_or(s)
}

/// Protein line writer.
pub struct ProteinWriter<W: Write> {
    writer: BufWriter<W>,
    itoa_buf: itoa::Buffer,
    ryu_buf: ryu::Buffer,
}

impl<W: Write> ProteinWriter<W> {
    /// Create a new ProteinWriter with the default buffer.
    pub fn new(output: W) -> Self {
        Self::with_capacity(DEFAULT_OUTPUT_BUFFER, output)
    }

    /// Create a new ProteinWriter with specified buffer size.
    pub fn with_capacity(capacity: usize, output: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, output),
            itoa_buf: itoa::Buffer::new(),
            ryu_buf: ryu::Buffer::new(),
        }
    }

    /// Write all twelve columns of a protein followed by `\n`.
    ///
    /// Text is written verbatim; absent text becomes an empty column.
    pub fn write_protein(&mut self, p: &Protein) -> Result<(), ProteinError> {
        self.write_int(p.project_number)?;
        self.write_tab()?;
        self.write_text(p.server_ip.as_deref())?;
        self.write_tab()?;
        self.write_text(p.work_unit_name.as_deref())?;
        self.write_tab()?;
        self.write_int(p.number_of_atoms)?;
        self.write_tab()?;
        self.write_float(p.preferred_days)?;
        self.write_tab()?;
        self.write_float(p.maximum_days)?;
        self.write_tab()?;
        self.write_float(p.credit)?;
        self.write_tab()?;
        self.write_int(p.frames)?;
        self.write_tab()?;
        self.write_text(p.core.as_deref())?;
        self.write_tab()?;
        self.write_text(p.description.as_deref())?;
        self.write_tab()?;
        self.write_text(p.contact.as_deref())?;
        self.write_tab()?;
        self.write_float(p.k_factor)?;
        self.write_newline()
    }

    #[inline]
    fn write_text(&mut self, text: Option<&str>) -> Result<(), ProteinError> {
        if let Some(text) = text {
            self.writer.write_all(text.as_bytes())?;
        }
        Ok(())
    }

    /// Write a tab character.
    #[inline]
    pub fn write_tab(&mut self) -> Result<(), ProteinError> {
        self.writer.write_all(b"\t")?;
        Ok(())
    }

    /// Write a newline character.
    #[inline]
    pub fn write_newline(&mut self) -> Result<(), ProteinError> {
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Write an integer using itoa.
    #[inline]
    pub fn write_int<I: itoa::Integer>(&mut self, n: I) -> Result<(), ProteinError> {
        self.writer.write_all(self.itoa_buf.format(n).as_bytes())?;
        Ok(())
    }

    /// Write a float using ryu.
    #[inline]
    pub fn write_float(&mut self, f: f64) -> Result<(), ProteinError> {
        self.writer
            .write_all(format_f64(&mut self.ryu_buf, f).as_bytes())?;
        Ok(())
    }

    /// Flush the output buffer.
    pub fn flush(&mut self) -> Result<(), ProteinError> {
        self.writer.flush()?;
        Ok(())
    }
}
