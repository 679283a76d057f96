use hashbrown::HashMap as FastHashMap;

use crate::pattern::compile_pattern;
use crate::registry::{RegistryError, RegistryMetrics, RegistryResult, Route};
use crate::route::RouteSpec;
use crate::router::RouterOptions;
use crate::table::RouteTable;
use crate::types::RouteId;

pub const MAX_ROUTES: usize = u16::MAX as usize;

/// Append-only route list used while the application bootstraps.
#[derive(Debug)]
pub struct RouteRegistry {
    options: RouterOptions,
    routes: Vec<Route>,
    names: FastHashMap<Box<str>, RouteId>,
    metrics: RegistryMetrics,
}

impl RouteRegistry {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            options,
            routes: Vec::new(),
            names: FastHashMap::new(),
            metrics: RegistryMetrics::default(),
        }
    }

    /// Validates and compiles `spec`, then appends it behind every route
    /// registered so far.
    pub fn insert(&mut self, spec: RouteSpec) -> RegistryResult<RouteId> {
        spec.validate()?;

        if self.routes.len() >= MAX_ROUTES {
            return Err(RegistryError::MaxRoutesExceeded { limit: MAX_ROUTES });
        }

        if let Some(name) = spec.name.as_deref()
            && let Some(&existing) = self.names.get(name)
        {
            return Err(RegistryError::DuplicateRouteName {
                name: name.to_string(),
                existing,
            });
        }

        let pattern = compile_pattern(&spec.pattern, self.options.case_sensitive)?;
        let id = self.routes.len() as RouteId;

        let optional = pattern.placeholders().filter(|p| p.optional).count();
        self.metrics
            .record_insert(pattern.is_static(), spec.name.is_some(), optional);

        if let Some(name) = spec.name.as_deref() {
            self.names.insert(name.into(), id);
        }

        tracing::debug!(
            route_id = id,
            pattern = %spec.pattern,
            target = %spec.target,
            "route registered"
        );
        self.routes.push(Route::new(id, spec, pattern));
        Ok(id)
    }

    pub fn insert_bulk<I>(&mut self, specs: I) -> RegistryResult<Vec<RouteId>>
    where
        I: IntoIterator<Item = RouteSpec>,
    {
        specs.into_iter().map(|spec| self.insert(spec)).collect()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    /// Freezes the registry into a read-only table.
    pub fn into_table(self) -> RouteTable {
        RouteTable::new(self.routes, self.names, self.options, self.metrics)
    }
}
