//! Error types for task configuration.

use thiserror::Error;

/// Errors that can occur while applying task options.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    /// The runtime cannot produce the options record a setting needs.
    #[error("unsupported configuration: runtime {runtime:?} has no runc-compatible options")]
    UnsupportedConfiguration { runtime: String },
}

/// Convenience type alias for task operations.
pub type Result<T> = std::result::Result<T, TaskError>;
