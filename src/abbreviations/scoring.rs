//! Abbreviation scoring.
//!
//! Only the second and third letters are scored; the first letter is fixed by
//! the name and always contributes nothing. Each scored letter falls into the
//! first matching class:
//!
//! | Class                         | Contribution                     |
//! |-------------------------------|----------------------------------|
//! | starts any word               | 0                                |
//! | ends any word                 | 20 for `E`, otherwise 5          |
//! | middle letter                 | position (2 or 3) + letter value |
//!
//! Lower totals are better.

use crate::constants::scoring::{
    MIDDLE_POSITION_OFFSET, WORD_END_E_SCORE, WORD_END_SCORE, WORD_END_SPECIAL_LETTER,
    WORD_START_SCORE,
};
use crate::values::LetterValues;

/// Scores an abbreviation against the words of the name it came from.
///
/// # Arguments
/// * `abbreviation` - A generated three-letter abbreviation
/// * `words` - The uppercase words of the source name
/// * `values` - Letter value table for middle letters
///
/// # Example
/// ```
/// use name_abbrevs::abbreviations::{score, split_words};
/// use name_abbrevs::values::LetterValues;
///
/// let values: LetterValues = ('A'..='Z').map(|c| (c, 1)).collect();
/// let words = split_words("Alice");
/// // L is a middle letter in second place (2 + 1), E ends the word (20)
/// assert_eq!(score("ALE", &words, &values), 23);
/// ```
pub fn score(abbreviation: &str, words: &[String], values: &LetterValues) -> u64 {
    abbreviation
        .chars()
        .enumerate()
        .skip(1)
        .map(|(position, letter)| letter_score(letter, position, words, values))
        .sum()
}

fn letter_score(letter: char, position: usize, words: &[String], values: &LetterValues) -> u64 {
    if words.iter().any(|word| word.starts_with(letter)) {
        WORD_START_SCORE
    } else if words.iter().any(|word| word.ends_with(letter)) {
        if letter == WORD_END_SPECIAL_LETTER {
            WORD_END_E_SCORE
        } else {
            WORD_END_SCORE
        }
    } else {
        position as u64 + MIDDLE_POSITION_OFFSET + u64::from(values.get(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abbreviations::words::split_words;

    fn uniform(weight: u32) -> LetterValues {
        ('A'..='Z').map(|c| (c, weight)).collect()
    }

    #[test]
    fn test_middle_letters_use_position_and_value() {
        let words = split_words("ALICE");
        // L second (2 + 1), I third (3 + 1)
        assert_eq!(score("ALI", &words, &uniform(1)), 7);
        // C second (2 + 1), E ends the word
        assert_eq!(score("ACE", &words, &uniform(1)), 23);
    }

    #[test]
    fn test_missing_letter_value_defaults_to_zero() {
        let words = split_words("JANE");
        let empty = LetterValues::default();
        assert_eq!(score("JAN", &words, &empty), 5);
        assert_eq!(score("JAE", &words, &empty), 22);
    }

    #[test]
    fn test_word_start_scores_zero() {
        let words = split_words("BOB");
        // O middle (2 + 1), B starts the word
        assert_eq!(score("BOB", &words, &uniform(1)), 3);
    }

    #[test]
    fn test_word_end_non_e_scores_five() {
        let words = split_words("MAX");
        assert_eq!(score("MAX", &words, &LetterValues::default()), 7);
    }

    #[test]
    fn test_word_end_e_scores_twenty() {
        let words = split_words("JOE");
        assert_eq!(score("JOE", &words, &LetterValues::default()), 22);
    }

    #[test]
    fn test_word_start_beats_word_end() {
        // M ends TOM and starts MAT; T starts TOM and ends MAT
        let words = split_words("Tom Mat");
        assert_eq!(score("TMT", &words, &uniform(10)), 0);
        // A is only ever a middle letter
        assert_eq!(score("TMA", &words, &uniform(10)), 13);
    }

    #[test]
    fn test_rules_apply_across_all_words() {
        // S starts SMITH even though it sits in the middle of ROSS
        let words = split_words("Ross Smith");
        assert_eq!(score("ROS", &words, &uniform(4)), 6);
    }

    #[test]
    fn test_letter_value_only_affects_middle_letters() {
        let words = split_words("ALICE");
        let heavy: LetterValues = [('C', 50), ('E', 50)].into_iter().collect();
        assert_eq!(score("ACE", &words, &heavy), 2 + 50 + 20);
    }

    #[test]
    fn test_maximum_letter_values_do_not_overflow() {
        let words = split_words("ALICE");
        let values = LetterValues::parse("L 4294967295\nI 4294967295\n", "values.txt").unwrap();
        let max = u64::from(u32::MAX);
        assert_eq!(score("ALI", &words, &values), (2 + max) + (3 + max));
    }

    #[test]
    fn test_score_is_deterministic() {
        let words = split_words("Alexander Hamilton");
        let values = uniform(3);
        let first = score("AXN", &words, &values);
        let second = score("AXN", &words, &values);
        assert_eq!(first, second);
    }
}
