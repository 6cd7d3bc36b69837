use std::collections::HashSet;

use oav_core::{Diagnostic, MessageCarrier, ResolvedDocument, Severity};

use crate::convention::check_convention;
use crate::operations::extract_operations;
use crate::resource::{is_resource_oriented, PathShape};
use crate::rule::Rule;
use crate::types::{RuleConfig, ValidateInput};

pub const RULE_ID: &str = "operation-ids";

pub const UNIQUE_MESSAGE: &str = "operationIds must be unique";

const CONVENTION_MESSAGE: &str = "operationIds should follow naming convention: operationId verb should be";

/// Operations must have unique operationIds, and on resource-oriented paths
/// the operationId must start with the verb conventional for its method.
pub struct OperationIdsRule;

impl Rule for OperationIdsRule {
    fn id(&self) -> &str {
        RULE_ID
    }

    fn eval(&self, input: &ValidateInput<'_>) -> Vec<Diagnostic> {
        let doc = input.resolved_spec;
        let mut messages = MessageCarrier::new(self.id());
        let mut seen: HashSet<&str> = HashSet::new();

        for op in extract_operations(doc) {
            let Some(operation_id) = op.operation_id.filter(|id| !id.is_empty()) else {
                continue;
            };
            let locator = format!("{}.operationId", op.locator());

            if !seen.insert(operation_id) {
                messages.add_message(locator, UNIQUE_MESSAGE, Severity::Error);
                continue;
            }

            if !is_resource_oriented(op.path_key, doc) {
                tracing::trace!(path = op.path_key, verb = %op.verb, "not resource oriented, skipping convention");
                continue;
            }

            let shape = PathShape::of(op.path_key);
            let check = check_convention(op.verb, operation_id, &op.path_operations, shape.ends_with_param());
            if !check.passed {
                messages.add_message(
                    locator,
                    format!("{} {}", CONVENTION_MESSAGE, check.expected()),
                    input.config.operation_id_naming_convention,
                );
            }
        }

        tracing::debug!(rule = RULE_ID, findings = messages.len(), "rule evaluated");
        messages.into_messages()
    }
}

/// Run the operationId rule over one document.
pub fn evaluate(resolved_spec: &ResolvedDocument, config: &RuleConfig) -> Vec<Diagnostic> {
    OperationIdsRule.eval(&ValidateInput::new(resolved_spec, config))
}
