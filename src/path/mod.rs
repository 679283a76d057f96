mod error;
mod normalize;

pub use error::{PathError, PathResult};
pub use normalize::{NormalizationOptions, normalize_path, strip_query};
