//! Import of the Folding@Home project summary JSON.
//!
//! The summary is a single JSON array of project objects. It is read in one
//! pass and mapped onto [`Protein`] values; the format cannot be written.

use crate::error::{ProteinError, Result};
use crate::protein::Protein;
use crate::serializer::ProteinSerializer;
use serde::Deserialize;
use std::io::{Read, Write};

/// Project summary page.
pub const HTML: &str = "https://apps.foldingathome.org/psummary";
/// Project summary page including beta projects.
pub const HTML_BETA: &str = "https://apps.foldingathome.org/psummary?visibility=BETA";
/// Project summary page including every project.
pub const HTML_COMPLETE: &str = "https://apps.foldingathome.org/psummary?visibility=ALL";
/// Project summary JSON.
pub const JSON: &str = "https://apps.foldingathome.org/psummary.json";

/// Prefix of the per-project description URL.
pub const PROJECT_URL_PREFIX: &str = "https://apps.foldingathome.org/project.py?p=";

/// Bonus factor used when a project does not declare one.
pub const DEFAULT_K_FACTOR: f64 = 0.75;

/// Frame count assumed for every summary project.
pub const DEFAULT_FRAMES: i32 = 100;

const SECONDS_PER_DAY: f64 = 86400.0;

/// One element of the summary array. Missing and `null` keys take default
/// values.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectSummary {
    id: Option<i32>,
    ws: Option<String>,
    atoms: Option<i32>,
    timeout: Option<i64>,
    deadline: Option<i64>,
    credit: Option<f64>,
    #[serde(rename = "type")]
    core: Option<String>,
    contact: Option<String>,
    bonus: Option<f64>,
}

impl From<ProjectSummary> for Protein {
    fn from(s: ProjectSummary) -> Self {
        let id = s.id.unwrap_or_default();
        Protein {
            project_number: id,
            server_ip: s.ws,
            work_unit_name: Some(format!("p{}", id)),
            number_of_atoms: s.atoms.unwrap_or_default(),
            preferred_days: seconds_to_days(s.timeout.unwrap_or_default()),
            maximum_days: seconds_to_days(s.deadline.unwrap_or_default()),
            credit: s.credit.unwrap_or_default(),
            frames: DEFAULT_FRAMES,
            core: s.core,
            description: Some(format!("{}{}", PROJECT_URL_PREFIX, id)),
            contact: s.contact,
            k_factor: s.bonus.unwrap_or(DEFAULT_K_FACTOR),
        }
    }
}

/// Seconds to days, rounded to three decimals with ties away from zero.
#[inline]
fn seconds_to_days(seconds: i64) -> f64 {
    (seconds as f64 / SECONDS_PER_DAY * 1000.0).round() / 1000.0
}

/// Parse a project summary document.
///
/// Empty input yields no proteins. `null` array elements are skipped.
/// The result is not filtered for validity.
pub fn parse_project_summary(json: &str) -> Result<Vec<Protein>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    let summaries: Vec<Option<ProjectSummary>> = serde_json::from_str(json)?;
    Ok(summaries.into_iter().flatten().map(Protein::from).collect())
}

/// The project summary JSON format. Read only.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectSummaryJson;

impl ProjectSummaryJson {
    pub fn new() -> Self {
        Self
    }
}

impl ProteinSerializer for ProjectSummaryJson {
    fn deserialize<R: Read>(&self, mut reader: R) -> Result<Vec<Protein>> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        parse_project_summary(&json)
    }

    fn serialize<W: Write>(&self, _writer: W, _proteins: &[Protein]) -> Result<()> {
        Err(ProteinError::Unsupported(
            "project summary JSON cannot be serialized",
        ))
    }
}
