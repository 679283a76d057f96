//! URL router for MVC applications.
//!
//! Route patterns such as `/{:lang::?}/news/{:id:\d+}` are compiled into
//! anchored matchers at registration time. A sealed [`RouteTable`] resolves
//! request paths to a controller/action pair plus parameters, trying routes
//! strictly in registration order, and builds URLs back from a route name or
//! a controller/action pair.
//!
//! ```
//! use bunner_mvc_router::Router;
//!
//! let router = Router::new(None);
//! router.connect("/{:lang::?}/news/{:id:\\d+}", "news/view", [("module", "news")]).unwrap();
//! router.connect("/{:lang::?}/news/{:action::?}", "news", [("module", "news")]).unwrap();
//! let table = router.seal();
//!
//! let found = table.match_path("/fr/news/12").unwrap();
//! assert_eq!(found.target(), ("news", "view"));
//! assert_eq!(found.get("lang"), Some("fr"));
//! assert_eq!(found.module(), Some("news"));
//!
//! let url = table.url_for(("news", "archive"), [("lang", "en")]).unwrap();
//! assert_eq!(url, "/en/news/archive");
//! ```

pub mod dispatch;
pub mod errors;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod registry;
pub mod route;
pub mod router;
pub mod table;
pub mod types;
pub mod url;

pub use dispatch::{DispatchError, Dispatcher};
pub use errors::{RouterError, RouterResult};
pub use pattern::{CompiledPattern, PatternError, compile_pattern};
pub use route::{RouteDefinition, RouteSpec, RouteTarget};
pub use router::{Router, RouterOptions, RouterOptionsBuilder, SharedRouteTable};
pub use table::{RouteTable, TableError};
pub use types::{RouteId, RouteMatch, RouteParams};
pub use url::{RouteRef, UrlError};
