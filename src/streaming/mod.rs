//! Streaming building blocks for the tab-delimited protein format.
//!
//! This module provides the pieces the decoder and encoder are built from:
//! - Allocation-free line and tab splitting over byte windows
//! - Carryover of lines truncated at a window boundary
//! - Positional record parsing with invariant number formats
//! - Buffered line output with itoa/ryu formatting

pub mod buffers;
pub mod carryover;
pub mod lines;
pub mod output;
pub mod parsing;

pub use carryover::CarryoverBuffer;
pub use lines::{split_lines, split_tabs, LineEntry, LineSplit, TabSplit};
pub use output::ProteinWriter;
pub use parsing::{parse_protein, should_skip_line};
