//! The protein (work unit) record.

use crate::change::PropertyChange;
use crate::streaming::output::format_f64;
use std::fmt;

/// Number of columns in a tab-delimited protein line.
pub const FIELD_COUNT: usize = 12;

/// Field names in declaration order. This is also the column order of the
/// tab-delimited format and the order of property changes.
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "project_number",
    "server_ip",
    "work_unit_name",
    "number_of_atoms",
    "preferred_days",
    "maximum_days",
    "credit",
    "frames",
    "core",
    "description",
    "contact",
    "k_factor",
];

/// A Folding@Home project description.
///
/// Text fields are `None` when the source did not provide them at all and
/// `Some("")` when the value was present but empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Protein {
    /// Project number, the collection key.
    pub project_number: i32,
    pub server_ip: Option<String>,
    pub work_unit_name: Option<String>,
    pub number_of_atoms: i32,
    /// Preferred deadline in decimal days.
    pub preferred_days: f64,
    /// Final deadline in decimal days.
    pub maximum_days: f64,
    /// Base credit.
    pub credit: f64,
    pub frames: i32,
    pub core: Option<String>,
    pub description: Option<String>,
    pub contact: Option<String>,
    /// Bonus factor.
    pub k_factor: f64,
}

/// A borrowed view of one record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Int(i32),
    Float(f64),
    Text(Option<&'a str>),
}

impl FieldValue<'_> {
    /// Text rendering used by diffs, or `None` for an absent text value.
    pub fn render(&self) -> Option<String> {
        match *self {
            FieldValue::Int(n) => Some(itoa::Buffer::new().format(n).to_string()),
            FieldValue::Float(f) => Some(format_f64(&mut ryu::Buffer::new(), f).to_string()),
            FieldValue::Text(s) => s.map(str::to_string),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FieldValue::Int(n) => write!(f, "{}", n),
            FieldValue::Float(v) => f.write_str(format_f64(&mut ryu::Buffer::new(), v)),
            FieldValue::Text(s) => f.write_str(s.unwrap_or("")),
        }
    }
}

impl Protein {
    /// Create an otherwise empty protein with the given project number.
    pub fn new(project_number: i32) -> Self {
        Self {
            project_number,
            ..Self::default()
        }
    }

    /// Structural validity check. Only valid proteins are stored in a
    /// collection or reported in a change set.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.project_number > 0
            && self.preferred_days > 0.0
            && self.maximum_days > 0.0
            && self.credit > 0.0
            && self.frames > 0
    }

    /// All fields paired with their names, in declaration order.
    pub fn fields(&self) -> [(&'static str, FieldValue<'_>); FIELD_COUNT] {
        [
            (FIELD_NAMES[0], FieldValue::Int(self.project_number)),
            (FIELD_NAMES[1], FieldValue::Text(self.server_ip.as_deref())),
            (FIELD_NAMES[2], FieldValue::Text(self.work_unit_name.as_deref())),
            (FIELD_NAMES[3], FieldValue::Int(self.number_of_atoms)),
            (FIELD_NAMES[4], FieldValue::Float(self.preferred_days)),
            (FIELD_NAMES[5], FieldValue::Float(self.maximum_days)),
            (FIELD_NAMES[6], FieldValue::Float(self.credit)),
            (FIELD_NAMES[7], FieldValue::Int(self.frames)),
            (FIELD_NAMES[8], FieldValue::Text(self.core.as_deref())),
            (FIELD_NAMES[9], FieldValue::Text(self.description.as_deref())),
            (FIELD_NAMES[10], FieldValue::Text(self.contact.as_deref())),
            (FIELD_NAMES[11], FieldValue::Float(self.k_factor)),
        ]
    }

    /// Field-level differences from `previous` to `self`.
    ///
    /// A field is reported when both sides have a value and their text
    /// renderings differ. Fields that are absent on either side are skipped.
    pub fn changes_from(&self, previous: &Protein) -> Vec<PropertyChange> {
        previous
            .fields()
            .iter()
            .zip(self.fields().iter())
            .filter_map(|((name, before), (_, after))| {
                let before = before.render()?;
                let after = after.render()?;
                (before != after).then(|| PropertyChange::new(*name, before, after))
            })
            .collect()
    }
}

/// Renders the tab-delimited line, without a terminator.
impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
