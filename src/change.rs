//! Change set produced by [`ProteinCollection::update`](crate::ProteinCollection::update).

use std::fmt;

/// One changed field of a protein.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChange {
    pub property_name: &'static str,
    pub previous: String,
    pub current: String,
}

impl PropertyChange {
    pub fn new(
        property_name: &'static str,
        previous: impl Into<String>,
        current: impl Into<String>,
    ) -> Self {
        Self {
            property_name,
            previous: previous.into(),
            current: current.into(),
        }
    }
}

impl fmt::Display for PropertyChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: '{}' -> '{}'",
            self.property_name, self.previous, self.current
        )
    }
}

/// What happened to a key during an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// The key was not present before.
    Added,
    /// The key was present and at least one field differs.
    Changed(Vec<PropertyChange>),
    /// The key was present and no field differs.
    Unchanged,
}

/// Fieldless tag of a [`ChangeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Added,
    Changed,
    Unchanged,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Changed => "changed",
            Self::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one incoming protein.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinChange {
    pub project_number: i32,
    pub kind: ChangeKind,
}

impl ProteinChange {
    pub fn added(project_number: i32) -> Self {
        Self {
            project_number,
            kind: ChangeKind::Added,
        }
    }

    pub fn unchanged(project_number: i32) -> Self {
        Self {
            project_number,
            kind: ChangeKind::Unchanged,
        }
    }

    pub fn changed<I>(project_number: i32, changes: I) -> Self
    where
        I: IntoIterator<Item = PropertyChange>,
    {
        Self {
            project_number,
            kind: ChangeKind::Changed(changes.into_iter().collect()),
        }
    }

    pub fn action(&self) -> ChangeAction {
        match self.kind {
            ChangeKind::Added => ChangeAction::Added,
            ChangeKind::Changed(_) => ChangeAction::Changed,
            ChangeKind::Unchanged => ChangeAction::Unchanged,
        }
    }

    /// Field deltas; empty unless the action is `Changed`.
    pub fn property_changes(&self) -> &[PropertyChange] {
        match &self.kind {
            ChangeKind::Changed(changes) => changes.as_slice(),
            _ => &[],
        }
    }
}

impl fmt::Display for ProteinChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.project_number, self.action())?;
        for change in self.property_changes() {
            write!(f, "\t{}", change)?;
        }
        Ok(())
    }
}
