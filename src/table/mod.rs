mod error;
mod snapshot;

pub use error::{TableError, TableResult};
pub use snapshot::RouteTable;
