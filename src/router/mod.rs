mod options;
mod service;
mod shared;

pub use options::{
    DEFAULT_ACTION, DEFAULT_CONTROLLER, RouterOptions, RouterOptionsBuilder, RouterOptionsError,
};
pub use service::Router;
pub use shared::SharedRouteTable;
