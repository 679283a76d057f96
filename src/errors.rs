use crate::dispatch::DispatchError;
use crate::registry::RegistryError;
use crate::router::RouterOptionsError;
use crate::table::TableError;
use crate::url::UrlError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is sealed; cannot add {count} routes in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; route table is unavailable")]
    TableUnavailable,
    #[error("route definitions could not be parsed: {0}")]
    InvalidDefinitions(#[from] serde_json::Error),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Url(#[from] UrlError),
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

pub type RouterResult<T> = Result<T, RouterError>;
