use crate::errors::{RouterError, RouterResult};
use crate::registry::{RegistryError, RouteRegistry};
use crate::route::{RouteDefinition, RouteSpec, RouteTarget, load_definitions};
use crate::router::RouterOptions;
use crate::table::RouteTable;
use crate::types::{RouteId, RouteMatch};
use crate::url::RouteRef;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::OnceLock;

#[derive(Debug)]
struct RouterState {
    registry: RouteRegistry,
    table: OnceLock<Arc<RouteTable>>,
}

impl RouterState {
    fn new(options: RouterOptions) -> Self {
        Self {
            registry: RouteRegistry::new(options),
            table: OnceLock::new(),
        }
    }
}

/// Owns the route table of one application.
///
/// Routes are registered while the router is open; [`Router::seal`] freezes
/// them into a shared [`RouteTable`] after which lookups are served and no
/// more routes can be added.
#[derive(Debug)]
pub struct Router {
    inner: RwLock<RouterState>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Router {
    /// Creates an open router. Invalid default controller or action names are
    /// replaced by the built-in ones; use [`Router::try_new`] to reject them.
    pub fn new(options: Option<RouterOptions>) -> Self {
        let options = options.unwrap_or_default().with_valid_defaults();
        let state = RouterState::new(options);
        Self {
            inner: RwLock::new(state),
        }
    }

    /// Like [`Router::new`] but validates the options first.
    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    pub fn add(&self, spec: RouteSpec) -> RouterResult<RouteId> {
        let mut guard = self.inner.write();

        if guard.table.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                pattern: spec.pattern,
            });
        }

        Ok(guard.registry.insert(spec)?)
    }

    /// Registers `pattern` for a target written as `""`, `"controller"` or
    /// `"controller/action"`, with static parameters attached to every match.
    pub fn connect<I, K, V>(&self, pattern: &str, target: &str, static_params: I) -> RouterResult<RouteId>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let target = RouteTarget::parse(target).map_err(RegistryError::from)?;
        let spec = RouteSpec::builder(pattern)
            .target(target)
            .static_params(static_params)
            .build()
            .map_err(RegistryError::from)?;
        self.add(spec)
    }

    pub fn add_bulk<I>(&self, specs: I) -> RouterResult<Vec<RouteId>>
    where
        I: IntoIterator<Item = RouteSpec>,
    {
        let mut guard = self.inner.write();

        if guard.table.get().is_some() {
            let count = specs.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        }

        Ok(guard.registry.insert_bulk(specs)?)
    }

    pub fn add_definitions<I>(&self, definitions: I) -> RouterResult<Vec<RouteId>>
    where
        I: IntoIterator<Item = RouteDefinition>,
    {
        let specs = definitions
            .into_iter()
            .map(RouteSpec::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(RegistryError::from)?;
        self.add_bulk(specs)
    }

    /// Registers every route of a JSON route file in file order.
    pub fn load_json(&self, json: &str) -> RouterResult<Vec<RouteId>> {
        let definitions = load_definitions(json)?;
        self.add_definitions(definitions)
    }

    /// Freezes the registered routes. Sealing again returns the same table.
    pub fn seal(&self) -> Arc<RouteTable> {
        let mut guard = self.inner.write();

        if let Some(table) = guard.table.get() {
            return table.clone();
        }

        let options = guard.registry.options().clone();
        let registry = std::mem::replace(&mut guard.registry, RouteRegistry::new(options));
        let table = Arc::new(registry.into_table());

        tracing::debug!(
            routes = table.len(),
            static_routes = table.metrics().static_routes,
            "router sealed"
        );

        let _ = guard.table.set(table.clone());
        table
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().table.get().is_some()
    }

    pub fn find(&self, path: &str) -> RouterResult<RouteMatch> {
        let guard = self.inner.read();

        match guard.table.get() {
            Some(table) => Ok(table.find(path)?),
            None => Err(RouterError::FindWhileMutable),
        }
    }

    /// Resolves `path`; `None` for a miss and while the router is still open.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let guard = self.inner.read();

        match guard.table.get() {
            Some(table) => table.match_path(path),
            None => {
                tracing::debug!(path = %path, "lookup on unsealed router");
                None
            }
        }
    }

    pub fn url_for<'a, R, I, K, V>(&self, route_ref: R, params: I) -> RouterResult<String>
    where
        R: Into<RouteRef<'a>>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let table = self.table()?;
        Ok(table.url_for(route_ref, params)?)
    }

    pub fn table(&self) -> RouterResult<Arc<RouteTable>> {
        let guard = self.inner.read();

        match guard.table.get() {
            Some(table) => Ok(table.clone()),
            None => Err(RouterError::TableUnavailable),
        }
    }
}
