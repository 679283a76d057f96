use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path contains control or whitespace byte {byte} in '{input}'")]
    ControlOrWhitespace { input: String, byte: u8 },
    #[error("path '{input}' normalizes to invalid parent traversal '{normalized}'")]
    InvalidParentTraversal { input: String, normalized: String },
}

pub type PathResult<T> = Result<T, PathError>;
