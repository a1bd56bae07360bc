//! Diagnostic trace sinks.
//!
//! The pipeline reports what it is doing through a [`TraceSink`] handed to it
//! by the caller instead of a process-wide logger. The binary uses
//! [`TracingSink`], which forwards to `tracing`; tests pass [`NullSink`] or a
//! recording sink to capture or suppress the trace.

use std::collections::BTreeSet;
use std::path::Path;

use crate::abbreviations::Selection;
use crate::values::LetterValues;

/// A single diagnostic event emitted by the pipeline.
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a> {
    NamesLoaded { names: &'a [String] },
    ValuesLoaded { values: &'a LetterValues },
    Generated {
        name: &'a str,
        abbreviations: &'a BTreeSet<String>,
    },
    Scored {
        name: &'a str,
        abbreviation: &'a str,
        score: u64,
    },
    Selected { selection: &'a Selection },
    ResultsWritten { path: &'a Path },
}

pub trait TraceSink {
    fn record(&self, event: TraceEvent<'_>);
}

/// Forwards events to the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&self, event: TraceEvent<'_>) {
        match event {
            TraceEvent::NamesLoaded { names } => {
                tracing::info!(count = names.len(), "Loaded names: {names:?}");
            }
            TraceEvent::ValuesLoaded { values } => {
                tracing::info!(count = values.len(), "Loaded letter values: {values}");
            }
            TraceEvent::Generated {
                name,
                abbreviations,
            } => {
                tracing::debug!(
                    count = abbreviations.len(),
                    "Generated abbreviations for '{name}': {abbreviations:?}"
                );
            }
            TraceEvent::Scored {
                name,
                abbreviation,
                score,
            } => {
                tracing::debug!(person = name, "Score for abbreviation '{abbreviation}': {score}");
            }
            TraceEvent::Selected { selection } => {
                tracing::debug!(
                    unresolved = selection.unresolved().len(),
                    "Final abbreviations: {selection:?}"
                );
            }
            TraceEvent::ResultsWritten { path } => {
                tracing::info!("Results written to {}", path.display());
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&self, _event: TraceEvent<'_>) {}
}
