use thiserror::Error;

use crate::path::PathError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("no route matched path '{path}'")]
    RouteNotFound { path: String },
    #[error(transparent)]
    Path(#[from] PathError),
}

pub type TableResult<T> = Result<T, TableError>;
