use oav_core::{ResolvedDocument, Severity};
use serde::{Deserialize, Serialize};

/// Severities for the configurable findings of the built-in rules.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    pub operation_id_naming_convention: Severity,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            operation_id_naming_convention: Severity::Warning,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ValidateInput<'a> {
    pub resolved_spec: &'a ResolvedDocument,
    pub config: &'a RuleConfig,
}

impl<'a> ValidateInput<'a> {
    pub fn new(resolved_spec: &'a ResolvedDocument, config: &'a RuleConfig) -> Self {
        Self { resolved_spec, config }
    }
}
