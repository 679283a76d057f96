use arc_swap::ArcSwap;
use std::sync::Arc;

use crate::errors::RouterResult;
use crate::route::RouteSpec;
use crate::router::{Router, RouterOptions};
use crate::table::RouteTable;
use crate::types::RouteMatch;

/// Handle to the active route table that supports wholesale reloads.
///
/// Readers take a snapshot with [`SharedRouteTable::load`] and keep using it
/// for the rest of the request; a reload builds a complete table first and
/// then replaces the active one in a single atomic store.
#[derive(Debug)]
pub struct SharedRouteTable {
    current: ArcSwap<RouteTable>,
}

impl SharedRouteTable {
    pub fn new(table: Arc<RouteTable>) -> Self {
        Self {
            current: ArcSwap::new(table),
        }
    }

    pub fn from_router(router: &Router) -> Self {
        Self::new(router.seal())
    }

    pub fn load(&self) -> Arc<RouteTable> {
        self.current.load_full()
    }

    /// Installs `table` and returns the one it replaced.
    pub fn replace(&self, table: Arc<RouteTable>) -> Arc<RouteTable> {
        let routes = table.len();
        let previous = self.current.swap(table);
        tracing::debug!(
            routes,
            previous_routes = previous.len(),
            "route table swapped"
        );
        previous
    }

    /// Builds and seals a fresh table from `specs`, then swaps it in. On any
    /// registration error the active table stays in place.
    pub fn rebuild<I>(&self, options: RouterOptions, specs: I) -> RouterResult<Arc<RouteTable>>
    where
        I: IntoIterator<Item = RouteSpec>,
    {
        let router = Router::try_new(options)?;
        router.add_bulk(specs)?;
        Ok(self.replace(router.seal()))
    }

    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        self.current.load().match_path(path)
    }
}
