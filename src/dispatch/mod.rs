mod error;
mod registry;

pub use error::{DispatchError, DispatchResult};
pub use registry::{Dispatcher, Handler};
