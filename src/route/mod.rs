mod definition;
mod error;
mod spec;
mod target;

pub use definition::{RouteDefinition, load_definitions};
pub use error::{RouteSpecError, RouteSpecResult};
pub use spec::{RouteSpec, RouteSpecBuilder};
pub use target::RouteTarget;
