//! Unique three-letter abbreviations for lists of names
//!
//! This library builds every three-letter abbreviation of each name in a
//! list, scores them against a letter value table, and keeps for each name
//! the lowest-scoring abbreviation(s) that no other name shares.
//!
//! # Examples
//!
//! ```rust,no_run
//! use name_abbrevs::app::run;
//! use name_abbrevs::config::RunConfig;
//! use name_abbrevs::error::AppError;
//! use name_abbrevs::trace::TracingSink;
//!
//! fn main() -> Result<(), AppError> {
//!     let config = RunConfig::new("list.txt", "Smith");
//!
//!     let outcome = run(&config, &TracingSink)?;
//!     println!("{}", outcome.user_message());
//!
//!     Ok(())
//! }
//! ```

pub mod abbreviations;
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod names;
pub mod output;
pub mod testing_utils;
pub mod trace;
pub mod values;

// Re-export commonly used types for convenience
pub use abbreviations::{Selection, generate, score, select};
pub use config::RunConfig;
pub use error::AppError;
pub use values::LetterValues;

