use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("no route matched path '{path}'")]
    NotFound { path: String },
    #[error("no handler registered for {controller}/{action}")]
    HandlerNotFound { controller: String, action: String },
    #[error("a handler for {controller}/{action} is already registered")]
    DuplicateHandler { controller: String, action: String },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
