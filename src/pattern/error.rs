use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("unexpected '}}' at byte {index} in pattern '{pattern}'")]
    UnexpectedClosingBrace { pattern: String, index: usize },
    #[error("placeholder starting at byte {start} in pattern '{pattern}' is not terminated")]
    UnterminatedPlaceholder { pattern: String, start: usize },
    #[error("placeholder at byte {index} in pattern '{pattern}' must start with '{{:'")]
    PlaceholderMissingPrefix { pattern: String, index: usize },
    #[error("placeholder at byte {index} in pattern '{pattern}' is missing a name")]
    ParameterMissingName { pattern: String, index: usize },
    #[error(
        "parameter name '{name}' in pattern '{pattern}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        pattern: String,
        name: String,
        found: char,
    },
    #[error("parameter name '{name}' in pattern '{pattern}' contains invalid character '{invalid}'")]
    ParameterInvalidCharacter {
        pattern: String,
        name: String,
        invalid: char,
    },
    #[error("duplicate parameter name '{param}' in pattern '{pattern}'")]
    DuplicateParamName { param: String, pattern: String },
    #[error("constraint for parameter '{name}' in pattern '{pattern}' is not a valid regex: {error}")]
    RegexConstraintInvalid {
        pattern: String,
        name: String,
        error: String,
    },
    #[error("pattern '{pattern}' could not be compiled: {error}")]
    RegexCompileFailed { pattern: String, error: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
