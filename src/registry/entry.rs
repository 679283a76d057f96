use crate::pattern::CompiledPattern;
use crate::route::{RouteSpec, RouteTarget};
use crate::types::RouteId;

/// A registered route: its `RouteSpec` and the pattern compiled from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    id: RouteId,
    spec: RouteSpec,
    pattern: CompiledPattern,
}

impl Route {
    pub(crate) fn new(id: RouteId, spec: RouteSpec, pattern: CompiledPattern) -> Self {
        Self { id, spec, pattern }
    }

    pub fn id(&self) -> RouteId {
        self.id
    }

    pub fn spec(&self) -> &RouteSpec {
        &self.spec
    }

    pub fn name(&self) -> Option<&str> {
        self.spec.name.as_deref()
    }

    pub fn target(&self) -> &RouteTarget {
        &self.spec.target
    }

    pub fn static_params(&self) -> &[(String, String)] {
        &self.spec.static_params
    }

    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }
}
