use crate::abbreviations::select;
use crate::config::RunConfig;
use crate::error::AppError;
use crate::names::load_names;
use crate::output::write_results;
use crate::trace::{TraceEvent, TraceSink};
use crate::values::LetterValues;
use std::path::PathBuf;

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Results were written for `name_count` distinct names.
    Written {
        output_path: PathBuf,
        name_count: usize,
        unresolved: Vec<String>,
    },
    /// Nothing to do: the names file was missing (`missing_file`) or held no names.
    NoNames { missing_file: Option<PathBuf> },
}

impl RunOutcome {
    /// Message shown to the user once the run is over, one line per notice.
    pub fn user_message(&self) -> String {
        match self {
            RunOutcome::NoNames { missing_file } => {
                let mut lines = Vec::with_capacity(2);
                if let Some(path) = missing_file {
                    lines.push(format!(
                        "Error: The file '{}' was not found. Please check the file path and try again.",
                        path.display()
                    ));
                }
                lines.push("No valid names found in the input file. Exiting.".to_string());
                lines.join("\n")
            }
            RunOutcome::Written { output_path, .. } => {
                format!("Results have been written to {}", output_path.display())
            }
        }
    }
}

/// Run the abbreviation pipeline for one configuration.
///
/// - Loads names; a missing names file ends the run with `RunOutcome::NoNames`
/// - Loads the letter values before any scoring
/// - Selects the best unique abbreviation(s) per name
/// - Writes the results file
///
/// Every other failure is returned as an error.
pub fn run(config: &RunConfig, sink: &dyn TraceSink) -> Result<RunOutcome, AppError> {
    let names = match load_names(&config.names_path) {
        Ok(names) => names,
        Err(e) if e.is_not_found() => {
            return Ok(RunOutcome::NoNames {
                missing_file: Some(config.names_path.clone()),
            });
        }
        Err(e) => return Err(e),
    };
    sink.record(TraceEvent::NamesLoaded { names: &names });

    if names.is_empty() {
        return Ok(RunOutcome::NoNames { missing_file: None });
    }

    let values = LetterValues::load(&config.values_path)?;
    sink.record(TraceEvent::ValuesLoaded { values: &values });

    let selection = select(&names, &values, sink);

    let output_path = config.output_path();
    write_results(&output_path, &selection)?;
    sink.record(TraceEvent::ResultsWritten { path: &output_path });

    Ok(RunOutcome::Written {
        output_path,
        name_count: selection.len(),
        unresolved: selection
            .unresolved()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
