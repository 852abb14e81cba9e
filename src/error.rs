use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for font name fixing
#[derive(Debug, Error)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Font parsing or loading errors
    #[error("Font error: {0}")]
    Font(String),
    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Configuration errors, fatal before any font is classified
    #[error("Configuration error: {0}")]
    Config(String),
    /// A rule file entry that cannot be turned into a usable rule
    #[error("Dictionary error in rule \"{rule}\": {message}")]
    Dictionary { rule: String, message: String },
    /// A custom match pattern did not produce family and style groups
    #[error("Pattern error: /{pattern}/ produced {groups} capture group(s) for \"{name}\", expected at least 2")]
    Pattern {
        name: String,
        pattern: String,
        groups: usize,
    },
    /// Nothing left to classify once separators are removed
    #[error("Empty name: \"{0}\" contains no words")]
    EmptyName(String),
    /// JSON rule file or report errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// TOML rule file errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn dictionary(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Dictionary {
            rule: rule.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for fontfix operations
pub type Result<T> = std::result::Result<T, Error>;
