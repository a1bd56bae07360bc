//! Name decomposition into words and letter sequences.

/// Splits a name into its words: maximal runs of ASCII letters, uppercased.
/// Every other character separates words and is dropped.
///
/// # Examples
/// ```
/// use name_abbrevs::abbreviations::split_words;
///
/// assert_eq!(split_words("Mary-Jane O'Neil"), vec!["MARY", "JANE", "O", "NEIL"]);
/// assert!(split_words("42 !").is_empty());
/// ```
pub fn split_words(name: &str) -> Vec<String> {
    name.to_uppercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Concatenates the words of a name into one uppercase letter sequence.
///
/// # Example
/// ```
/// use name_abbrevs::abbreviations::letter_sequence;
///
/// assert_eq!(letter_sequence("Ann Lee"), vec!['A', 'N', 'N', 'L', 'E', 'E']);
/// ```
pub fn letter_sequence(name: &str) -> Vec<char> {
    split_words(name)
        .iter()
        .flat_map(|word| word.chars())
        .collect()
}
