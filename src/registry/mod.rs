mod entry;
mod error;
mod stats;
mod store;

pub use entry::Route;
pub use error::{RegistryError, RegistryResult};
pub use stats::RegistryMetrics;
pub use store::{MAX_ROUTES, RouteRegistry};
