//! Error types for tsgrpc generation

use thiserror::Error;

/// Result type alias for generation operations
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error type for generation operations
#[derive(Error, Debug)]
pub enum GenerateError {
    /// Malformed or unsupported generator parameter
    #[error("configuration error: {0}")]
    Config(String),

    /// The descriptor set declares the same file twice
    #[error("duplicate schema file: {0}")]
    DuplicateFile(String),

    /// Two declarations share one fully qualified message name
    #[error("message {message} is declared in both {first} and {second}")]
    DuplicateMessage {
        message: String,
        first: String,
        second: String,
    },

    /// A file was requested that is not part of the descriptor set
    #[error("unknown schema file: {0}")]
    UnknownFile(String),

    /// A file imports a file that is not part of the descriptor set
    #[error("{file}: dependency {dependency} is not part of the descriptor set")]
    MissingDependency { file: String, dependency: String },

    /// A method references a message type that is not part of the descriptor set
    #[error("method {method} references unknown message type {type_name}")]
    UnknownMessageType { method: String, type_name: String },

    /// A message name does not start with its owning file's package
    #[error("message {message} is not qualified by its package {package}")]
    PackageMismatch { message: String, package: String },

    /// A schema path is not a clean root-relative path
    #[error("invalid schema path {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    /// Writing generated text failed
    #[error("failed to write generated code")]
    Format(#[from] std::fmt::Error),

    /// The plugin request could not be decoded
    #[error("failed to decode request: {0}")]
    Decode(String),
}

/// Coarse classification of a [`GenerateError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The option string was rejected
    Configuration,
    /// The descriptor set is inconsistent
    Schema,
    /// An emission step failed
    Generation,
    /// The host exchange failed
    Transport,
}

impl GenerateError {
    /// Returns the category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Config(_) => ErrorKind::Configuration,
            GenerateError::DuplicateFile(_)
            | GenerateError::DuplicateMessage { .. }
            | GenerateError::UnknownFile(_)
            | GenerateError::MissingDependency { .. }
            | GenerateError::UnknownMessageType { .. } => ErrorKind::Schema,
            GenerateError::PackageMismatch { .. }
            | GenerateError::InvalidPath { .. }
            | GenerateError::Format(_) => ErrorKind::Generation,
            GenerateError::Decode(_) => ErrorKind::Transport,
        }
    }

    /// Shorthand for [`GenerateError::InvalidPath`]
    pub fn invalid_path(path: impl Into<String>, reason: &'static str) -> Self {
        GenerateError::InvalidPath {
            path: path.into(),
            reason,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Configuration => write!(f, "configuration"),
            ErrorKind::Schema => write!(f, "schema"),
            ErrorKind::Generation => write!(f, "generation"),
            ErrorKind::Transport => write!(f, "transport"),
        }
    }
}

impl From<serde_json::Error> for GenerateError {
    fn from(err: serde_json::Error) -> Self {
        GenerateError::Config(err.to_string())
    }
}

impl From<prost::DecodeError> for GenerateError {
    fn from(err: prost::DecodeError) -> Self {
        GenerateError::Decode(err.to_string())
    }
}
