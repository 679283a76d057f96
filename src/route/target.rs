use std::fmt;

use serde::{Deserialize, Serialize};

use super::{RouteSpecError, RouteSpecResult};

/// Controller/action reference a route resolves to.
///
/// The textual form is `""` for [`RouteTarget::Dynamic`], `"news"` for
/// [`RouteTarget::Controller`] and `"news/view"` for [`RouteTarget::Action`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RouteTarget {
    /// Controller and action both come from the matched parameters.
    #[default]
    Dynamic,
    /// Fixed controller; the action comes from the matched parameters.
    Controller(String),
    /// Fixed controller and action.
    Action { controller: String, action: String },
}

impl RouteTarget {
    pub fn controller<S: Into<String>>(controller: S) -> Self {
        Self::Controller(controller.into())
    }

    pub fn action<C: Into<String>, A: Into<String>>(controller: C, action: A) -> Self {
        Self::Action {
            controller: controller.into(),
            action: action.into(),
        }
    }

    pub fn parse(raw: &str) -> RouteSpecResult<Self> {
        let target = match raw.split_once('/') {
            None if raw.is_empty() => Self::Dynamic,
            None => Self::Controller(raw.to_string()),
            Some((_, action)) if action.contains('/') => {
                return Err(RouteSpecError::MalformedTarget {
                    target: raw.to_string(),
                });
            }
            Some((controller, action)) => Self::action(controller, action),
        };
        target.validate()?;
        Ok(target)
    }

    pub fn controller_name(&self) -> Option<&str> {
        match self {
            Self::Dynamic => None,
            Self::Controller(controller) | Self::Action { controller, .. } => Some(controller),
        }
    }

    pub fn action_name(&self) -> Option<&str> {
        match self {
            Self::Action { action, .. } => Some(action),
            _ => None,
        }
    }

    pub fn validate(&self) -> RouteSpecResult<()> {
        if self.controller_name().is_some_and(str::is_empty) {
            return Err(RouteSpecError::EmptyTarget { field: "controller" });
        }
        if self.action_name().is_some_and(str::is_empty) {
            return Err(RouteSpecError::EmptyTarget { field: "action" });
        }
        Ok(())
    }
}

impl fmt::Display for RouteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dynamic => Ok(()),
            Self::Controller(controller) => f.write_str(controller),
            Self::Action { controller, action } => write!(f, "{controller}/{action}"),
        }
    }
}

impl TryFrom<&str> for RouteTarget {
    type Error = RouteSpecError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl TryFrom<String> for RouteTarget {
    type Error = RouteSpecError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<RouteTarget> for String {
    fn from(target: RouteTarget) -> Self {
        target.to_string()
    }
}

impl<C: Into<String>, A: Into<String>> From<(C, A)> for RouteTarget {
    fn from((controller, action): (C, A)) -> Self {
        Self::action(controller, action)
    }
}
