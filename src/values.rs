//! Letter value table used to weight middle letters during scoring.
//!
//! The table is parsed once from a plain text file with one `LETTER WEIGHT`
//! pair per line and is read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::AppError;

/// Read-only mapping from uppercase letters to non-negative weights.
///
/// Letters absent from the table weigh 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterValues {
    weights: HashMap<char, u32>,
}

impl LetterValues {
    /// Loads the table from `path`.
    ///
    /// # Errors
    /// * `AppError::ValuesFileRead` - The file is missing or unreadable
    /// * `AppError::MalformedValueEntry` - A non-empty line is not `LETTER WEIGHT`
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let display_path = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::values_file_read(display_path.clone(), e))?;
        Self::parse(&content, &display_path)
    }

    /// Parses table content. `source` names the origin in error messages.
    ///
    /// Blank lines are skipped. A letter listed twice keeps its last weight.
    ///
    /// # Example
    /// ```
    /// use name_abbrevs::values::LetterValues;
    ///
    /// let values = LetterValues::parse("A 1\nB 3\n", "values.txt").unwrap();
    /// assert_eq!(values.get('B'), 3);
    /// assert_eq!(values.get('Z'), 0);
    /// ```
    pub fn parse(content: &str, source: &str) -> Result<Self, AppError> {
        let mut weights = HashMap::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            let (letter, weight) = parse_entry(line)
                .map_err(|reason| AppError::malformed_value_entry(source, index + 1, line, reason))?;
            weights.insert(letter, weight);
        }

        Ok(Self { weights })
    }

    /// Weight of `letter`, 0 when the table has no entry for it.
    pub fn get(&self, letter: char) -> u32 {
        self.weights.get(&letter).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries sorted by letter.
    pub fn entries(&self) -> Vec<(char, u32)> {
        let mut entries: Vec<(char, u32)> = self.weights.iter().map(|(l, w)| (*l, *w)).collect();
        entries.sort_unstable();
        entries
    }
}

impl FromIterator<(char, u32)> for LetterValues {
    fn from_iter<I: IntoIterator<Item = (char, u32)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for LetterValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .entries()
            .into_iter()
            .map(|(letter, weight)| format!("{letter}:{weight}"))
            .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

fn parse_entry(line: &str) -> Result<(char, u32), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [letter_token, weight_token] = tokens.as_slice() else {
        return Err(format!("expected 2 tokens, found {}", tokens.len()));
    };

    let mut chars = letter_token.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => c,
        _ => return Err(format!("'{letter_token}' is not a single uppercase letter")),
    };

    let weight = weight_token
        .parse::<u32>()
        .map_err(|_| format!("invalid weight '{weight_token}'"))?;

    Ok((letter, weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_basic_table() {
        let values = LetterValues::parse("A 1\nB 2\nZ 26\n", "values.txt").unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values.get('A'), 1);
        assert_eq!(values.get('B'), 2);
        assert_eq!(values.get('Z'), 26);
    }

    #[test]
    fn test_missing_letter_defaults_to_zero() {
        let values = LetterValues::parse("A 5", "values.txt").unwrap();
        assert_eq!(values.get('Q'), 0);
    }

    #[test]
    fn test_blank_lines_and_extra_whitespace_are_skipped() {
        let values = LetterValues::parse("\n  A\t4  \n\n   \nC 9\n", "values.txt").unwrap();
        assert_eq!(values.entries(), vec![('A', 4), ('C', 9)]);
    }

    #[test]
    fn test_duplicate_letter_keeps_last_weight() {
        let values = LetterValues::parse("A 1\nA 7\n", "values.txt").unwrap();
        assert_eq!(values.get('A'), 7);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_wrong_token_count_is_malformed() {
        let error = LetterValues::parse("A 1\nB\n", "values.txt").unwrap_err();
        match error {
            AppError::MalformedValueEntry { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "B");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(LetterValues::parse("A 1 2", "values.txt").is_err());
    }

    #[test]
    fn test_non_numeric_weight_is_malformed() {
        let error = LetterValues::parse("A one", "values.txt").unwrap_err();
        assert!(error.to_string().contains("invalid weight 'one'"));
    }

    #[test]
    fn test_negative_weight_is_malformed() {
        assert!(matches!(
            LetterValues::parse("A -3", "values.txt"),
            Err(AppError::MalformedValueEntry { .. })
        ));
    }

    #[test]
    fn test_letter_token_must_be_single_uppercase_letter() {
        assert!(LetterValues::parse("a 1", "values.txt").is_err());
        assert!(LetterValues::parse("AB 1", "values.txt").is_err());
        assert!(LetterValues::parse("1 1", "values.txt").is_err());
    }

    #[test]
    fn test_display_is_sorted() {
        let values: LetterValues = [('C', 3), ('A', 1)].into_iter().collect();
        assert_eq!(values.to_string(), "{A:1, C:3}");
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("values.txt");
        std::fs::write(&path, "E 2\nX 8\n").unwrap();

        let values = LetterValues::load(&path).unwrap();
        assert_eq!(values.get('E'), 2);
        assert_eq!(values.get('X'), 8);
    }

    #[test]
    fn test_load_missing_file_is_fatal() {
        let temp_dir = tempdir().unwrap();
        let error = LetterValues::load(&temp_dir.path().join("values.txt")).unwrap_err();
        assert!(matches!(error, AppError::ValuesFileRead { .. }));
        assert!(!error.is_not_found());
    }
}
