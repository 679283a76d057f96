use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::path::NormalizationOptions;

pub const DEFAULT_CONTROLLER: &str = "index";
pub const DEFAULT_ACTION: &str = "index";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    /// Whether literals and constraints compare case-sensitively.
    pub case_sensitive: bool,
    pub collapse_duplicate_slashes: bool,
    /// Percent-decode captured values before binding them.
    pub decode_params: bool,
    pub default_controller: String,
    pub default_action: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            collapse_duplicate_slashes: false,
            decode_params: true,
            default_controller: DEFAULT_CONTROLLER.to_string(),
            default_action: DEFAULT_ACTION.to_string(),
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        validate_default_name("default_controller", &self.default_controller)?;
        validate_default_name("default_action", &self.default_action)?;
        Ok(())
    }

    /// Replaces an invalid default controller or action with the built-in
    /// `"index"`, logging a warning for each replacement.
    pub(crate) fn with_valid_defaults(mut self) -> Self {
        if let Err(err) = validate_default_name("default_controller", &self.default_controller) {
            tracing::warn!(error = %err, "falling back to built-in default controller");
            self.default_controller = DEFAULT_CONTROLLER.to_string();
        }
        if let Err(err) = validate_default_name("default_action", &self.default_action) {
            tracing::warn!(error = %err, "falling back to built-in default action");
            self.default_action = DEFAULT_ACTION.to_string();
        }
        self
    }

    pub fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            collapse_duplicate_slashes: self.collapse_duplicate_slashes,
        }
    }
}

fn validate_default_name(field: &'static str, value: &str) -> Result<(), RouterOptionsError> {
    if value.is_empty() {
        return Err(RouterOptionsError::EmptyDefault { field });
    }
    if value.contains('/') {
        return Err(RouterOptionsError::DefaultContainsSlash {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn collapse_duplicate_slashes(mut self, value: bool) -> Self {
        self.options.collapse_duplicate_slashes = value;
        self
    }

    pub fn decode_params(mut self, value: bool) -> Self {
        self.options.decode_params = value;
        self
    }

    pub fn default_controller<S: Into<String>>(mut self, value: S) -> Self {
        self.options.default_controller = value.into();
        self
    }

    pub fn default_action<S: Into<String>>(mut self, value: S) -> Self {
        self.options.default_action = value.into();
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("{field} must not be empty")]
    EmptyDefault { field: &'static str },
    #[error("{field} must not contain '/' (got '{value}')")]
    DefaultContainsSlash { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_use_index_conventions() {
        let options = RouterOptions::default();
        assert!(options.case_sensitive);
        assert!(!options.collapse_duplicate_slashes);
        assert!(options.decode_params);
        assert_eq!(options.default_controller, "index");
        assert_eq!(options.default_action, "index");
    }

    #[test]
    fn builder_rejects_empty_default_action() {
        let err = RouterOptions::builder()
            .default_action("")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            RouterOptionsError::EmptyDefault {
                field: "default_action"
            }
        );
    }

    #[test]
    fn options_deserialize_with_missing_fields_defaulted() {
        let options: RouterOptions =
            serde_json::from_str(r#"{"case_sensitive": false, "default_action": "list"}"#)
                .unwrap();
        assert!(!options.case_sensitive);
        assert!(options.decode_params);
        assert_eq!(options.default_action, "list");
        assert_eq!(options.default_controller, "index");
    }
}
