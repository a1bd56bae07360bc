//! Results file rendering and writing.

use std::fs;
use std::path::Path;

use crate::abbreviations::Selection;
use crate::error::AppError;

/// Renders the selection as the results file body.
///
/// Each name produces three lines: the name, its abbreviations (possibly
/// empty), and a blank separator.
///
/// # Example
/// ```
/// use name_abbrevs::abbreviations::select;
/// use name_abbrevs::output::render_results;
/// use name_abbrevs::trace::NullSink;
/// use name_abbrevs::values::LetterValues;
///
/// let selection = select(&["Bob".to_string()], &LetterValues::default(), &NullSink);
/// assert_eq!(render_results(&selection), "Bob\nBOB\n\n");
/// ```
pub fn render_results(selection: &Selection) -> String {
    selection
        .iter()
        .map(|(name, abbreviations)| format!("{name}\n{abbreviations}\n\n"))
        .collect()
}

/// Writes the rendered selection to `path`, replacing any existing file.
pub fn write_results(path: &Path, selection: &Selection) -> Result<(), AppError> {
    fs::write(path, render_results(selection))
        .map_err(|e| AppError::output_write(path.display().to_string(), e))
}
