mod builder;
mod encode;
mod error;

pub use builder::{RouteRef, build_url};
pub use encode::{encode_query_component, encode_segment};
pub use error::{UrlError, UrlResult};
