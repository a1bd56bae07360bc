//! Three-letter abbreviation generation, scoring and selection.
//!
//! This module provides functions for:
//! - Splitting a name into uppercase words and its letter sequence
//! - Generating every candidate abbreviation for one name
//! - Scoring candidates by word position and letter value
//! - Selecting the best abbreviation(s) that are unique across a name list

pub mod generator;
pub mod scoring;
pub mod selection;
pub mod words;

pub use generator::generate;
pub use scoring::score;
pub use selection::{ScoredOccurrence, Selection, collect_occurrences, select};
pub use words::{letter_sequence, split_words};
