mod params;
pub mod resolver;

pub(crate) use params::bind_match;
pub use resolver::find_route;
