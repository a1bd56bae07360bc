//! User interaction and prompts for run configuration
//!
//! This module asks the user for the values that were not supplied on the
//! command line. Prompts read from any `BufRead` and write to any `Write`
//! so they can be driven from tests.

use crate::constants::prompts;
use crate::error::AppError;
use std::io::{BufRead, Write};

/// Writes `message`, flushes, and returns the trimmed line the user typed.
///
/// End of input yields an empty string.
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    message: &str,
) -> Result<String, AppError> {
    write!(writer, "{message}")?;
    writer.flush()?;
    let mut input = String::new();
    reader.read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompts for the names file.
///
/// # Example
/// ```
/// use name_abbrevs::config::user_prompts::prompt_for_input_file;
///
/// let mut input = "list.txt\n".as_bytes();
/// let mut output = Vec::new();
/// let file = prompt_for_input_file(&mut input, &mut output).unwrap();
/// assert_eq!(file, "list.txt");
/// ```
pub fn prompt_for_input_file<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<String, AppError> {
    prompt(reader, writer, prompts::INPUT_FILE)
}

/// Prompts for the surname used in the results file name.
pub fn prompt_for_surname<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<String, AppError> {
    prompt(reader, writer, prompts::SURNAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_writes_message_and_trims_input() {
        let mut input = "   Smith  \n".as_bytes();
        let mut output = Vec::new();
        let surname = prompt_for_surname(&mut input, &mut output).unwrap();

        assert_eq!(surname, "Smith");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter your surname: ");
    }

    #[test]
    fn test_prompt_at_end_of_input() {
        let mut input = "".as_bytes();
        let mut output = Vec::new();
        assert_eq!(prompt_for_input_file(&mut input, &mut output).unwrap(), "");
    }

    #[test]
    fn test_prompts_read_consecutive_lines() {
        let mut input = "list.txt\nsmith\n".as_bytes();
        let mut output = Vec::new();
        let file = prompt_for_input_file(&mut input, &mut output).unwrap();
        let surname = prompt_for_surname(&mut input, &mut output).unwrap();

        assert_eq!((file.as_str(), surname.as_str()), ("list.txt", "smith"));
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Enter the name of the input .txt file: Enter your surname: "
        );
    }
}
