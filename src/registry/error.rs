use crate::pattern::PatternError;
use crate::route::RouteSpecError;
use crate::types::RouteId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("maximum number of routes exceeded: limit {limit}")]
    MaxRoutesExceeded { limit: usize },
    #[error("route name '{name}' is already used by route {existing}")]
    DuplicateRouteName { name: String, existing: RouteId },
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Spec(#[from] RouteSpecError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
