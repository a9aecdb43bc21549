use std::io;
use thiserror::Error;

/// Errors produced by snipdeck-core operations.
///
/// Validation rejections (blank or duplicate names) are not errors: the
/// quick code service reports them as `Ok(false)` so callers can keep the
/// editing surface open.
#[derive(Error, Debug)]
pub enum SnipdeckError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lookup of a catalog group that does not exist.
    #[error("no catalog group titled '{0}'")]
    GroupNotFound(String),

    /// Lookup of a component missing from its group.
    #[error("no component named '{name}' in group '{group}'")]
    ComponentNotFound { group: String, name: String },

    /// A static catalog definition is missing a required field.
    /// Raised at catalog build time, never during a user action.
    #[error("invalid catalog component '{name}': missing or blank {field}")]
    InvalidComponent { name: String, field: &'static str },

    /// A quick code group addressed by name is gone.
    #[error("no quick code group named '{0}'")]
    CodeGroupNotFound(String),
}

pub type Result<T> = std::result::Result<T, SnipdeckError>;
