use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteSpecError {
    #[error("route name must not be empty")]
    EmptyName,
    #[error("route target {field} must not be empty")]
    EmptyTarget { field: &'static str },
    #[error("route target '{target}' has more than one '/' separator")]
    MalformedTarget { target: String },
    #[error("static parameter keys must not be empty")]
    EmptyStaticParamKey,
    #[error("static parameter '{key}' is declared more than once")]
    DuplicateStaticParam { key: String },
}

pub type RouteSpecResult<T> = Result<T, RouteSpecError>;
