use hashbrown::HashMap as FastHashMap;

use crate::matcher::{bind_match, find_route};
use crate::path::normalize_path;
use crate::registry::{RegistryMetrics, Route};
use crate::router::RouterOptions;
use crate::types::{RouteId, RouteMatch};
use crate::url::{RouteRef, UrlResult, build_url};

use super::{TableError, TableResult};

/// Sealed, read-only list of routes in priority order.
///
/// A table never changes once built; reloading routes means building a new
/// table and swapping it in (see [`crate::router::SharedRouteTable`]).
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    names: FastHashMap<Box<str>, RouteId>,
    options: RouterOptions,
    metrics: RegistryMetrics,
}

impl RouteTable {
    pub(crate) fn new(
        routes: Vec<Route>,
        names: FastHashMap<Box<str>, RouteId>,
        options: RouterOptions,
        metrics: RegistryMetrics,
    ) -> Self {
        Self {
            routes,
            names,
            options,
            metrics,
        }
    }

    pub fn empty(options: RouterOptions) -> Self {
        Self::new(
            Vec::new(),
            FastHashMap::new(),
            options,
            RegistryMetrics::default(),
        )
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id as usize)
    }

    pub fn route_by_name(&self, name: &str) -> Option<&Route> {
        self.names.get(name).and_then(|&id| self.route(id))
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

    /// Resolves a request path, reporting a miss as [`TableError::RouteNotFound`].
    #[tracing::instrument(level = "trace", skip(self), fields(path = %path))]
    pub fn find(&self, path: &str) -> TableResult<RouteMatch> {
        let normalized = normalize_path(path, &self.options.normalization())?;

        let found = match find_route(&self.routes, &normalized) {
            Some((route, captures)) => Ok(bind_match(route, captures, &self.options)),
            None => Err(TableError::RouteNotFound {
                path: path.to_string(),
            }),
        };
        found
    }

    /// Resolves a request path; `None` when no route matches or the path
    /// cannot be normalized.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        match self.find(path) {
            Ok(found) => Some(found),
            Err(TableError::RouteNotFound { .. }) => None,
            Err(err) => {
                tracing::debug!(error = %err, "request path rejected");
                None
            }
        }
    }

    /// Builds a URL for a named route or a controller/action pair.
    pub fn url_for<'a, R, I, K, V>(&self, route_ref: R, params: I) -> UrlResult<String>
    where
        R: Into<RouteRef<'a>>,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        build_url(self, route_ref.into(), params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RouteRegistry;
    use crate::route::{RouteSpec, RouteTarget};

    fn table(patterns: &[&str]) -> RouteTable {
        let mut registry = RouteRegistry::new(RouterOptions::default());
        for pattern in patterns {
            registry
                .insert(RouteSpec::new(*pattern, RouteTarget::controller("pages")))
                .unwrap();
        }
        registry.into_table()
    }

    #[test]
    fn find_binds_captures_from_normalized_path() {
        let table = table(&["/pages/{:action}"]);
        let found = table.find("pages/show/?draft=1").unwrap();
        assert_eq!(found.target(), ("pages", "show"));
    }

    #[test]
    fn find_reports_miss_with_original_path() {
        let table = table(&["/pages/{:action}"]);
        assert_eq!(
            table.find("/other?x=1"),
            Err(TableError::RouteNotFound {
                path: "/other?x=1".to_string()
            })
        );
    }
}
