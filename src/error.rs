use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while analyzing a Go test file and its companion.
///
/// Only a `Parse` error on the primary test file is fatal to a run; the
/// pipeline downgrades every other variant to a warning.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Parse error in {path}:{line}:{column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Function {name} not found in file {path}")]
    FunctionNotFound { name: String, path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("Failed to load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

impl AnalysisError {
    pub fn parse(path: impl Into<PathBuf>, line: usize, column: usize, message: impl Into<String>) -> Self {
        AnalysisError::Parse {
            path: path.into(),
            line,
            column,
            message: message.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, AnalysisError::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
