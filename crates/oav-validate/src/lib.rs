pub mod convention;
pub mod operation_ids;
pub mod operations;
pub mod resource;
pub mod rule;
pub mod types;

pub use convention::{check_convention, ConventionCheck};
pub use operation_ids::{evaluate, OperationIdsRule};
pub use operations::{extract_operations, OperationRecord};
pub use resource::{is_resource_oriented, PathShape};
pub use rule::{default_rules, Rule};
pub use types::{RuleConfig, ValidateInput};
