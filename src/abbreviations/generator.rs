use std::collections::BTreeSet;

use super::words::letter_sequence;

/// Generates every distinct three-letter abbreviation of a name.
///
/// The first letter is always the first letter of the name's letter sequence.
/// The second and third letters are any two later letters, taken in order of
/// appearance. Names with fewer than three letters produce no abbreviations.
///
/// # Example
/// ```
/// use name_abbrevs::abbreviations::generate;
///
/// let abbreviations = generate("Bob");
/// assert_eq!(abbreviations.into_iter().collect::<Vec<_>>(), vec!["BOB"]);
/// ```
pub fn generate(name: &str) -> BTreeSet<String> {
    let letters = letter_sequence(name);
    let mut abbreviations = BTreeSet::new();

    let Some(&first) = letters.first() else {
        return abbreviations;
    };

    for (i, &second) in letters.iter().enumerate().skip(1) {
        for &third in &letters[i + 1..] {
            abbreviations.insert([first, second, third].iter().collect());
        }
    }

    abbreviations
}
