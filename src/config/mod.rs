use crate::constants::DEFAULT_VALUES_FILE;
use crate::error::AppError;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::output_file_name;
use user_prompts::{prompt_for_input_file, prompt_for_surname};
use validation::validate_config;

/// Everything one run of the pipeline needs to know.
/// Built from command line values, with prompts filling in the gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Names file, one name per line
    pub names_path: PathBuf,
    /// Lowercased surname used in the results file name
    pub surname: String,
    /// Letter values file. Defaults to `values.txt` in the working directory.
    pub values_path: PathBuf,
    /// Directory the results file is written to. Defaults to the working directory.
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Creates a config with the default values file and output directory.
    /// The surname is trimmed and lowercased.
    pub fn new(names_path: impl Into<PathBuf>, surname: &str) -> Self {
        RunConfig {
            names_path: names_path.into(),
            surname: surname.trim().to_lowercase(),
            values_path: PathBuf::from(DEFAULT_VALUES_FILE),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn with_values_path(mut self, values_path: impl Into<PathBuf>) -> Self {
        self.values_path = values_path.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Resolves the run configuration, prompting for any missing value.
    ///
    /// The names file is asked for before the surname, matching the order
    /// the values appear in the results file name.
    ///
    /// # Returns
    /// * `Ok(RunConfig)` - Validated configuration
    /// * `Err(AppError)` - Reading a prompt failed or validation failed
    pub fn resolve<R: BufRead, W: Write>(
        names_path: Option<PathBuf>,
        surname: Option<String>,
        values_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<Self, AppError> {
        let names_path = match names_path {
            Some(path) => path,
            None => PathBuf::from(prompt_for_input_file(reader, writer)?),
        };
        let surname = match surname {
            Some(surname) => surname,
            None => prompt_for_surname(reader, writer)?,
        };

        let mut config = RunConfig::new(names_path, &surname);
        if let Some(values_path) = values_path {
            config.values_path = values_path;
        }
        if let Some(output_dir) = output_dir {
            config.output_dir = output_dir;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.surname)
    }

    /// Results file location: `{surname}_{input-base-name}_abbrevs.txt`
    /// inside the output directory.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(output_file_name(&self.surname, &self.names_path))
    }
}
