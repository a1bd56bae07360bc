use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Input file errors
    #[error("Names file not found: {path}")]
    NamesFileNotFound { path: String },

    #[error("Failed to read names file '{path}': {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read letter values file '{path}': {source}")]
    ValuesFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed value entry at {path}:{line}: '{content}' ({reason})")]
    MalformedValueEntry {
        path: String,
        line: usize,
        content: String,
        reason: String,
    },

    // Output errors
    #[error("Failed to write results to '{path}': {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a missing names file error
    pub fn names_file_not_found(path: impl Into<String>) -> Self {
        Self::NamesFileNotFound { path: path.into() }
    }

    /// Create a names file read error
    pub fn file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a letter values file read error
    pub fn values_file_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ValuesFileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed value entry error for a line of the values file.
    /// `line` is 1-based.
    pub fn malformed_value_entry(
        path: impl Into<String>,
        line: usize,
        content: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedValueEntry {
            path: path.into(),
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Create an output write error
    pub fn output_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.into(),
            source,
        }
    }

    /// Check if error is the recoverable missing-names-file case
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NamesFileNotFound { .. })
    }
}
