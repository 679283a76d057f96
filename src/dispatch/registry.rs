use std::fmt;

use hashbrown::HashMap as FastHashMap;

use crate::table::RouteTable;
use crate::types::RouteMatch;

use super::{DispatchError, DispatchResult};

pub type Handler<Out> = Box<dyn Fn(&RouteMatch) -> Out + Send + Sync>;

/// Maps resolved `(controller, action)` names to handlers registered at
/// startup. The router only produces the names; this is where they turn into
/// calls.
pub struct Dispatcher<Out> {
    handlers: FastHashMap<Box<str>, FastHashMap<Box<str>, Handler<Out>>>,
}

impl<Out> fmt::Debug for Dispatcher<Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("handlers", &self.len())
            .finish()
    }
}

impl<Out> Default for Dispatcher<Out> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Out> Dispatcher<Out> {
    pub fn new() -> Self {
        Self {
            handlers: FastHashMap::new(),
        }
    }

    pub fn register<F>(&mut self, controller: &str, action: &str, handler: F) -> DispatchResult<()>
    where
        F: Fn(&RouteMatch) -> Out + Send + Sync + 'static,
    {
        if self.contains(controller, action) {
            return Err(DispatchError::DuplicateHandler {
                controller: controller.to_string(),
                action: action.to_string(),
            });
        }
        self.handlers
            .entry(controller.into())
            .or_default()
            .insert(action.into(), Box::new(handler));
        Ok(())
    }

    pub fn contains(&self, controller: &str, action: &str) -> bool {
        self.handler(controller, action).is_some()
    }

    fn handler(&self, controller: &str, action: &str) -> Option<&Handler<Out>> {
        self.handlers
            .get(controller)
            .and_then(|actions| actions.get(action))
    }

    pub fn len(&self) -> usize {
        self.handlers.values().map(|actions| actions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn dispatch(&self, route_match: &RouteMatch) -> DispatchResult<Out> {
        match self.handler(&route_match.controller, &route_match.action) {
            Some(handler) => Ok(handler(route_match)),
            None => Err(DispatchError::HandlerNotFound {
                controller: route_match.controller.clone(),
                action: route_match.action.clone(),
            }),
        }
    }

    /// Matches `path` against `table` and runs the resolved handler.
    #[tracing::instrument(level = "trace", skip(self, table), fields(path = %path))]
    pub fn dispatch_path(&self, table: &RouteTable, path: &str) -> DispatchResult<Out> {
        let route_match = table
            .match_path(path)
            .ok_or_else(|| DispatchError::NotFound {
                path: path.to_string(),
            })?;
        self.dispatch(&route_match)
    }
}
