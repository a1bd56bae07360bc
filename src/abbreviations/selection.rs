//! Cross-name selection of the best unique abbreviation(s).
//!
//! Selection runs in three passes over the whole name list:
//! 1. Collect a scored occurrence for every (name, abbreviation) pair
//! 2. Drop abbreviations produced by more than one name occurrence
//! 3. Keep each name's minimum-score survivors, sorted alphabetically

use std::collections::HashMap;

use indexmap::IndexMap;

use super::generator::generate;
use super::scoring::score;
use super::words::split_words;
use crate::trace::{TraceEvent, TraceSink};
use crate::values::LetterValues;

/// One scored abbreviation of one input name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredOccurrence {
    /// Index of the name in the input list
    pub name_index: usize,
    pub abbreviation: String,
    pub score: u64,
}

/// Final mapping from each input name to its chosen abbreviation(s).
///
/// Names keep their first-seen input order. The value is the space-joined
/// list of tied best abbreviations, or an empty string when the name has no
/// abbreviation unique to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    results: IndexMap<String, String>,
}

impl Selection {
    /// Result for `name`, `None` if the name was not part of the input.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.results.get(name).map(String::as_str)
    }

    /// Iterates `(name, abbreviations)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.results
            .iter()
            .map(|(name, abbreviations)| (name.as_str(), abbreviations.as_str()))
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Names left without any abbreviation.
    pub fn unresolved(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, abbreviations)| abbreviations.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

/// Scores every generated abbreviation of every name, in input order.
///
/// Duplicate names are kept as separate occurrences so that identical input
/// lines compete with each other for their abbreviations.
pub fn collect_occurrences(
    names: &[String],
    values: &LetterValues,
    sink: &dyn TraceSink,
) -> Vec<ScoredOccurrence> {
    let mut occurrences = Vec::new();

    for (name_index, name) in names.iter().enumerate() {
        let words = split_words(name);
        let abbreviations = generate(name);
        sink.record(TraceEvent::Generated {
            name,
            abbreviations: &abbreviations,
        });

        for abbreviation in abbreviations {
            let score = score(&abbreviation, &words, values);
            sink.record(TraceEvent::Scored {
                name,
                abbreviation: &abbreviation,
                score,
            });
            occurrences.push(ScoredOccurrence {
                name_index,
                abbreviation,
                score,
            });
        }
    }

    occurrences
}

/// Keeps only the occurrences whose abbreviation no other occurrence shares.
fn retain_unique(occurrences: Vec<ScoredOccurrence>) -> Vec<ScoredOccurrence> {
    let mut counts: HashMap<&str, usize> = HashMap::with_capacity(occurrences.len());
    for occurrence in &occurrences {
        *counts.entry(occurrence.abbreviation.as_str()).or_default() += 1;
    }

    let unique: Vec<bool> = occurrences
        .iter()
        .map(|occurrence| counts[occurrence.abbreviation.as_str()] == 1)
        .collect();

    occurrences
        .into_iter()
        .zip(unique)
        .filter_map(|(occurrence, is_unique)| is_unique.then_some(occurrence))
        .collect()
}

/// Joins the abbreviations tied at the lowest score, alphabetically.
fn best_of(mut candidates: Vec<(String, u64)>) -> String {
    candidates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    let Some(best_score) = candidates.first().map(|(_, score)| *score) else {
        return String::new();
    };

    candidates
        .into_iter()
        .take_while(|(_, score)| *score == best_score)
        .map(|(abbreviation, _)| abbreviation)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Selects the best unique abbreviation(s) for every name.
///
/// # Arguments
/// * `names` - Input names in file order, duplicates allowed
/// * `values` - Letter value table used for scoring
/// * `sink` - Receives generation, scoring and selection trace events
///
/// # Returns
/// * `Selection` - Every distinct input name mapped to its result
///
/// # Example
/// ```
/// use name_abbrevs::abbreviations::select;
/// use name_abbrevs::trace::NullSink;
/// use name_abbrevs::values::LetterValues;
///
/// let values: LetterValues = ('A'..='Z').map(|c| (c, 1)).collect();
/// let names = vec!["ALICE".to_string(), "BOB".to_string()];
///
/// let selection = select(&names, &values, &NullSink);
/// assert_eq!(selection.get("ALICE"), Some("AIC ALC ALI"));
/// assert_eq!(selection.get("BOB"), Some("BOB"));
/// ```
pub fn select(names: &[String], values: &LetterValues, sink: &dyn TraceSink) -> Selection {
    let occurrences = collect_occurrences(names, values, sink);
    let survivors = retain_unique(occurrences);

    let mut per_name: HashMap<usize, Vec<(String, u64)>> = HashMap::new();
    for occurrence in survivors {
        per_name
            .entry(occurrence.name_index)
            .or_default()
            .push((occurrence.abbreviation, occurrence.score));
    }

    let mut results: IndexMap<String, String> = IndexMap::with_capacity(names.len());
    for (name_index, name) in names.iter().enumerate() {
        if results.contains_key(name) {
            continue;
        }
        let best = per_name
            .remove(&name_index)
            .map(best_of)
            .unwrap_or_default();
        results.insert(name.clone(), best);
    }

    let selection = Selection { results };
    sink.record(TraceEvent::Selected {
        selection: &selection,
    });
    selection
}
