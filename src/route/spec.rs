use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use super::{RouteSpecError, RouteSpecResult, RouteTarget};

/// A route as registered at bootstrap: the raw pattern, the target it
/// resolves to and the static parameters attached to every match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub pattern: String,
    pub target: RouteTarget,
    pub static_params: Vec<(String, String)>,
    pub name: Option<String>,
}

impl RouteSpec {
    pub fn new<P: Into<String>>(pattern: P, target: RouteTarget) -> Self {
        Self {
            pattern: pattern.into(),
            target,
            static_params: Vec::new(),
            name: None,
        }
    }

    pub fn builder<P: Into<String>>(pattern: P) -> RouteSpecBuilder {
        RouteSpecBuilder {
            spec: Self::new(pattern, RouteTarget::Dynamic),
        }
    }

    pub fn static_param(&self, key: &str) -> Option<&str> {
        self.static_params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn validate(&self) -> RouteSpecResult<()> {
        self.target.validate()?;
        if self.name.as_ref().is_some_and(|name| name.trim().is_empty()) {
            return Err(RouteSpecError::EmptyName);
        }

        let mut seen = HashSet::with_capacity(self.static_params.len());
        for (key, _) in &self.static_params {
            if key.is_empty() {
                return Err(RouteSpecError::EmptyStaticParamKey);
            }
            if !seen.insert(key.as_str()) {
                return Err(RouteSpecError::DuplicateStaticParam { key: key.clone() });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RouteSpecBuilder {
    spec: RouteSpec,
}

impl RouteSpecBuilder {
    pub fn target<T: Into<RouteTarget>>(mut self, target: T) -> Self {
        self.spec.target = target.into();
        self
    }

    pub fn controller<S: Into<String>>(mut self, controller: S) -> Self {
        self.spec.target = RouteTarget::controller(controller);
        self
    }

    pub fn action<C: Into<String>, A: Into<String>>(mut self, controller: C, action: A) -> Self {
        self.spec.target = RouteTarget::action(controller, action);
        self
    }

    pub fn static_param<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.spec.static_params.push((key.into(), value.into()));
        self
    }

    pub fn static_params<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.spec
            .static_params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.spec.name = Some(name.into());
        self
    }

    pub fn build(self) -> RouteSpecResult<RouteSpec> {
        self.spec.validate()?;
        Ok(self.spec)
    }
}
