// Clippy allows for the whole crate
#![allow(clippy::too_many_arguments)]

//! Folding@Home project (protein) tables.
//!
//! This library reads and writes the project descriptions ("proteins") used
//! to estimate work unit production, and keeps them in a keyed collection
//! that can be refreshed from a new snapshot while reporting what changed.
//!
//! # Features
//!
//! - **Streaming tab-delimited codec**: fixed-size read windows, no per-line
//!   allocation, `\n`, `\r` and `\r\n` line endings
//! - **Project summary import**: the Folding@Home summary JSON
//! - **Snapshot diffing**: per-project added / changed / unchanged results
//!   with field-level deltas
//!
//! # Example
//!
//! ```rust,no_run
//! use fah_proteins::{tab, ProteinCollection};
//!
//! let mut collection: ProteinCollection = tab::read_proteins("ProjectInfo.tab")
//!     .unwrap()
//!     .into_iter()
//!     .collect();
//!
//! let snapshot = tab::read_proteins("ProjectInfo.new.tab").unwrap();
//! for change in collection.update(snapshot) {
//!     println!("{}", change);
//! }
//! ```

pub mod change;
pub mod collection;
pub mod config;
pub mod error;
pub mod json;
pub mod production;
pub mod protein;
pub mod serializer;
pub mod streaming;
pub mod tab;

// Re-export commonly used types
pub use change::{ChangeAction, ChangeKind, PropertyChange, ProteinChange};
pub use collection::ProteinCollection;
pub use error::{ProteinError, Result};
pub use json::ProjectSummaryJson;
pub use production::ProteinProduction;
pub use protein::Protein;
pub use serializer::{ProteinSerializer, SerializerKind};
pub use tab::{TabDecoder, TabDelimitedText};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::change::{ChangeAction, ChangeKind, PropertyChange, ProteinChange};
    pub use crate::collection::ProteinCollection;
    pub use crate::json::ProjectSummaryJson;
    pub use crate::protein::Protein;
    pub use crate::serializer::{ProteinSerializer, SerializerKind};
    pub use crate::tab::{TabDecoder, TabDelimitedText};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_decode_then_update_workflow() {
        use crate::change::ChangeAction;
        use crate::collection::ProteinCollection;
        use crate::tab::parse_proteins;

        let first = "1\ts\tp1\t10\t1\t2\t100\t100\tc\td\te\t0.75\n\
                     2\ts\tp2\t10\t1\t2\t100\t100\tc\td\te\t0.75\n";
        let second = "2\ts\tp2\t10\t1\t2\t150\t100\tc\td\te\t0.75\n\
                      3\ts\tp3\t10\t1\t2\t100\t100\tc\td\te\t0.75\n";

        let mut collection: ProteinCollection =
            parse_proteins(first).unwrap().into_iter().collect();
        let changes = collection.update(parse_proteins(second).unwrap());

        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].action(), ChangeAction::Changed);
        assert_eq!(changes[0].property_changes()[0].property_name, "credit");
        assert_eq!(changes[1].action(), ChangeAction::Added);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.get(1).unwrap().credit, 100.0);
    }
}
