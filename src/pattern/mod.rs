mod ast;
mod compiled;
mod error;
mod parser;

pub use ast::{PatternAst, PatternNode, PlaceholderNode};
pub use compiled::{
    CaptureList, CompiledPattern, DEFAULT_CONSTRAINT, OPTIONAL_SEPARATORS, Placeholder,
    RouteSegment, compile_pattern,
};
pub use error::{PatternError, PatternResult};
pub use parser::parse_pattern;
