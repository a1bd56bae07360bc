use crate::trace::{TraceEvent, TraceSink};
use crate::values::LetterValues;
use std::cell::RefCell;

/// Test utilities for creating value tables and name lists
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a table giving every letter A-Z the same weight
    pub fn uniform_values(weight: u32) -> LetterValues {
        ('A'..='Z').map(|letter| (letter, weight)).collect()
    }

    /// Creates a table from explicit (letter, weight) pairs
    pub fn values(entries: &[(char, u32)]) -> LetterValues {
        entries.iter().copied().collect()
    }

    /// Creates an owned name list
    pub fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }
}

/// Trace sink that keeps a one-line summary of every event.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded summaries, oldest first
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    /// Recorded summaries starting with `prefix`
    pub fn events_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|event| event.starts_with(prefix))
            .cloned()
            .collect()
    }
}

impl TraceSink for RecordingSink {
    fn record(&self, event: TraceEvent<'_>) {
        let summary = match event {
            TraceEvent::NamesLoaded { names } => format!("names: {}", names.join(", ")),
            TraceEvent::ValuesLoaded { values } => format!("values: {values}"),
            TraceEvent::Generated {
                name,
                abbreviations,
            } => format!(
                "generated {name}: {}",
                abbreviations.iter().cloned().collect::<Vec<_>>().join(" ")
            ),
            TraceEvent::Scored {
                name,
                abbreviation,
                score,
            } => format!("scored {name} {abbreviation}: {score}"),
            TraceEvent::Selected { selection } => format!(
                "selected: {}",
                selection
                    .iter()
                    .map(|(name, abbreviations)| format!("{name}={abbreviations}"))
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
            TraceEvent::ResultsWritten { path } => format!("written: {}", path.display()),
        };
        self.events.borrow_mut().push(summary);
    }
}
