//! Error types and exit codes for wayfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, heap underflow)
//! - 2: Usage error (bad flags/args)
//! - 3: Graph/data error (absent or foreign vertex, malformed graph document)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph/data error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfinder operations
#[derive(Error, Debug)]
pub enum WayfinderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph/data errors (exit code 3)
    #[error("missing required argument: {name}")]
    NullArgument { name: String },

    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("edge not found: {edge}")]
    EdgeNotFound { edge: String },

    #[error("vertex {vertex} is not an endpoint of edge {edge}")]
    NotAnEndpoint { vertex: String, edge: String },

    #[error("invalid graph document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("heap is empty")]
    EmptyHeap,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfinderError {
    /// Create an error for an absent required argument
    pub fn null_argument(name: &str) -> Self {
        WayfinderError::NullArgument {
            name: name.to_string(),
        }
    }

    /// Create an error for a vertex that does not belong to the graph
    pub fn vertex_not_found(vertex: impl std::fmt::Display) -> Self {
        WayfinderError::VertexNotFound {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for an edge that does not belong to the graph
    pub fn edge_not_found(edge: impl std::fmt::Display) -> Self {
        WayfinderError::EdgeNotFound {
            edge: edge.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WayfinderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a graph document that could not be interpreted
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        WayfinderError::InvalidDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfinderError::UnknownFormat(_)
            | WayfinderError::UsageError(_)
            | WayfinderError::InvalidValue { .. } => ExitCode::Usage,

            WayfinderError::NullArgument { .. }
            | WayfinderError::VertexNotFound { .. }
            | WayfinderError::EdgeNotFound { .. }
            | WayfinderError::NotAnEndpoint { .. }
            | WayfinderError::InvalidDocument { .. } => ExitCode::Data,

            WayfinderError::EmptyHeap
            | WayfinderError::Io(_)
            | WayfinderError::Json(_)
            | WayfinderError::Toml(_)
            | WayfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WayfinderError::UnknownFormat(_) => "unknown_format",
            WayfinderError::UsageError(_) => "usage_error",
            WayfinderError::InvalidValue { .. } => "invalid_value",
            WayfinderError::NullArgument { .. } => "null_argument",
            WayfinderError::VertexNotFound { .. } => "vertex_not_found",
            WayfinderError::EdgeNotFound { .. } => "edge_not_found",
            WayfinderError::NotAnEndpoint { .. } => "not_an_endpoint",
            WayfinderError::InvalidDocument { .. } => "invalid_document",
            WayfinderError::EmptyHeap => "empty_heap",
            WayfinderError::Io(_) => "io_error",
            WayfinderError::Json(_) => "json_error",
            WayfinderError::Toml(_) => "toml_error",
            WayfinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wayfinder operations
pub type Result<T> = std::result::Result<T, WayfinderError>;
