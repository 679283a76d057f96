use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("no route is named '{name}'")]
    UnknownRouteName { name: String },
    #[error("no route resolves to controller '{controller}' and action '{action}'")]
    NoRouteForTarget { controller: String, action: String },
    #[error("parameter '{param}' is required by pattern '{pattern}'")]
    MissingParameter { pattern: String, param: String },
    #[error("value '{value}' for parameter '{param}' does not satisfy its constraint in pattern '{pattern}'")]
    ConstraintViolation {
        pattern: String,
        param: String,
        value: String,
    },
    #[error("url '{url}' built for pattern '{pattern}' would match back to different parameters")]
    AmbiguousUrl { pattern: String, url: String },
}

pub type UrlResult<T> = Result<T, UrlError>;
