use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{path}: {source}")]
    Import {
        path: PathBuf,
        #[source]
        source: ImportError,
    },
}

/// A rejected document. Nothing of the document has been applied.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    Syntax(String),
    #[error("Invalid document: {0}")]
    Malformed(String),
    #[error("Invalid JSON format: expected object or array")]
    ExpectedObjectOrArray,
    #[error("Program contains no weeks")]
    NoWeeks,
    #[error("{day}, entry {position}: {message}")]
    InvalidEntry {
        day: String,
        position: usize,
        message: String,
    },
    #[error("Week {week}: {source}")]
    InvalidWeek {
        week: usize,
        #[source]
        source: Box<ImportError>,
    },
    #[error("Invalid user profile: {0}")]
    InvalidProfile(String),
    #[error("No valid 1RM data found")]
    NoOneRepMaxes,
    #[error("Template '{name}' not found in category '{category}'")]
    TemplateNotFound { category: String, name: String },
}

impl From<serde_json::Error> for ImportError {
    fn from(value: serde_json::Error) -> Self {
        if value.is_syntax() || value.is_eof() {
            ImportError::Syntax(value.to_string())
        } else {
            ImportError::Malformed(value.to_string())
        }
    }
}

/// Outcome of a best-effort import of independent items.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub errors: Vec<String>,
}

impl ImportReport {
    #[must_use]
    pub fn failed(&self) -> usize {
        self.errors.len()
    }
}
