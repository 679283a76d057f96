use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{RouteSpec, RouteSpecResult, RouteTarget};

/// Serialized form of one `connect(pattern, target, params)` entry in a
/// bootstrap route file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub pattern: String,
    #[serde(default)]
    pub target: RouteTarget,
    #[serde(default)]
    pub params: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl TryFrom<RouteDefinition> for RouteSpec {
    type Error = super::RouteSpecError;

    fn try_from(definition: RouteDefinition) -> RouteSpecResult<Self> {
        let spec = RouteSpec {
            pattern: definition.pattern,
            target: definition.target,
            static_params: definition.params.into_iter().collect(),
            name: definition.name,
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// Reads a JSON array of route definitions, keeping file order.
pub fn load_definitions(json: &str) -> serde_json::Result<Vec<RouteDefinition>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_definitions_in_file_order() {
        let json = r#"[
            {"pattern": "/{:lang::?}/news/{:id:\\d+}", "target": "news/view", "params": {"module": "news"}},
            {"pattern": "/{:lang::?}/news/{:action::?}", "target": "news", "name": "news"},
            {"pattern": "/{:controller}/{:action::?}"}
        ]"#;

        let definitions = load_definitions(json).unwrap();
        assert_eq!(definitions.len(), 3);
        assert_eq!(definitions[0].target, RouteTarget::action("news", "view"));
        assert_eq!(definitions[0].params.get("module").map(String::as_str), Some("news"));
        assert_eq!(definitions[1].target, RouteTarget::controller("news"));
        assert_eq!(definitions[1].name.as_deref(), Some("news"));
        assert_eq!(definitions[2].target, RouteTarget::Dynamic);

        let spec = RouteSpec::try_from(definitions[0].clone()).unwrap();
        assert_eq!(spec.static_param("module"), Some("news"));
    }

    #[test]
    fn rejects_malformed_target() {
        let json = r#"[{"pattern": "/x", "target": "a/b/c"}]"#;
        assert!(load_definitions(json).is_err());
    }
}
