use oav_core::Diagnostic;

use crate::operation_ids::OperationIdsRule;
use crate::types::ValidateInput;

/// A semantic check over a resolved document.
///
/// Rules hold no state between calls; everything an evaluation needs lives on
/// its own stack, so one instance can serve any number of documents.
pub trait Rule: Send + Sync {
    fn id(&self) -> &str;
    fn eval(&self, input: &ValidateInput<'_>) -> Vec<Diagnostic>;
}

/// Built-in rules, in the order their findings are reported.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(OperationIdsRule)]
}
