//! Positional parsing of one tab-delimited protein line.
//!
//! Columns are read by position; numbers use the invariant format
//! (`.` decimal separator, no grouping, optional sign and exponent).
//! The only allocations are the owned text fields of the result.

use crate::config::is_strict_fields;
use crate::error::FieldError;
use crate::protein::{Protein, FIELD_COUNT, FIELD_NAMES};
use std::str::FromStr;

use super::lines::split_tabs;

/// Check if a line carries no data (empty or whitespace only).
#[inline]
pub fn should_skip_line(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Parse one line into a protein.
///
/// Columns beyond the twelfth are ignored. Missing trailing columns keep
/// the field defaults unless strict field mode is enabled, in which case
/// the first missing column is an error. The result is not checked for
/// validity.
pub fn parse_protein(line: &[u8]) -> Result<Protein, FieldError> {
    let mut protein = Protein::default();
    let mut count = 0;

    for (index, field) in split_tabs(line).take(FIELD_COUNT).enumerate() {
        count += 1;
        match index {
            0 => protein.project_number = parse_number(index, field)?,
            1 => protein.server_ip = Some(parse_text(field).trim().to_string()),
            2 => protein.work_unit_name = Some(parse_text(field).trim().to_string()),
            3 => protein.number_of_atoms = parse_number(index, field)?,
            4 => protein.preferred_days = parse_number(index, field)?,
            5 => protein.maximum_days = parse_number(index, field)?,
            6 => protein.credit = parse_number(index, field)?,
            7 => protein.frames = parse_number(index, field)?,
            8 => protein.core = Some(parse_text(field)),
            9 => protein.description = Some(parse_text(field)),
            10 => protein.contact = Some(parse_text(field)),
            11 => protein.k_factor = parse_number(index, field)?,
            _ => unreachable!("take(FIELD_COUNT) bounds the column index"),
        }
    }

    if count < FIELD_COUNT && is_strict_fields() {
        return Err(FieldError::Missing {
            index: count,
            field: FIELD_NAMES[count],
        });
    }

    Ok(protein)
}

/// Parse a numeric column, ignoring surrounding ASCII whitespace.
#[inline]
fn parse_number<T: FromStr>(index: usize, field: &[u8]) -> Result<T, FieldError> {
    std::str::from_utf8(field.trim_ascii())
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| FieldError::Invalid {
            index,
            field: FIELD_NAMES[index],
            value: String::from_utf8_lossy(field).into_owned(),
        })
}

#[inline]
fn parse_text(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}
