//! Application-wide constants
//!
//! This module centralizes scoring weights, file naming rules and
//! user-facing text so they are defined in exactly one place.

/// Default letter values file, resolved against the working directory
pub const DEFAULT_VALUES_FILE: &str = "values.txt";

/// Suffix appended to every results file name
pub const OUTPUT_FILE_SUFFIX: &str = "_abbrevs.txt";

/// Tracing directive added on top of RUST_LOG so the diagnostic trace is always on
pub const DEFAULT_LOG_DIRECTIVE: &str = "name_abbrevs=debug";

/// Positional scoring rules
pub mod scoring {
    /// Letter that starts any word of the name
    pub const WORD_START_SCORE: u64 = 0;

    /// Letter that ends a word of the name (other than 'E')
    pub const WORD_END_SCORE: u64 = 5;

    /// Letter 'E' ending a word of the name
    pub const WORD_END_E_SCORE: u64 = 20;

    /// The end-of-word letter with its own score
    pub const WORD_END_SPECIAL_LETTER: char = 'E';

    /// Added to a middle letter's abbreviation index (second letter = 2, third = 3)
    pub const MIDDLE_POSITION_OFFSET: u64 = 1;
}

/// Interactive prompts
pub mod prompts {
    pub const INPUT_FILE: &str = "Enter the name of the input .txt file: ";
    pub const SURNAME: &str = "Enter your surname: ";
}
