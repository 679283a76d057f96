use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type RouteId = u16;
pub type RouteParams = HashMap<String, String>;

/// Outcome of resolving a request path: the route that matched, the resolved
/// controller/action pair and every bound parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMatch {
    pub route_id: RouteId,
    pub route_name: Option<String>,
    pub controller: String,
    pub action: String,
    /// Captured placeholders merged with the route's static parameters.
    pub params: RouteParams,
}

impl RouteMatch {
    /// Looks up a parameter; `controller` and `action` answer with the
    /// resolved names.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "controller" => Some(&self.controller),
            "action" => Some(&self.action),
            _ => self.params.get(key).map(String::as_str),
        }
    }

    pub fn module(&self) -> Option<&str> {
        self.get("module")
    }

    pub fn target(&self) -> (&str, &str) {
        (&self.controller, &self.action)
    }
}
