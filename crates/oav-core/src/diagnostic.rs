use serde::{Deserialize, Serialize};

use crate::model::Severity;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Diagnostic {
    pub rule_id: String,
    /// Dotted location inside the document, e.g. `paths./widgets.get.operationId`.
    pub locator: String,
    pub message: String,
    pub severity: Severity,
}

/// Append-only collector of diagnostics for one rule evaluation.
///
/// Messages added with `Severity::Off` are dropped on the floor, which is how
/// a rule gets switched off from configuration.
#[derive(Clone, Debug, Default)]
pub struct MessageCarrier {
    rule_id: String,
    messages: Vec<Diagnostic>,
}

impl MessageCarrier {
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, locator: impl Into<String>, message: impl Into<String>, severity: Severity) {
        if severity.is_suppressed() {
            return;
        }
        self.messages.push(Diagnostic {
            rule_id: self.rule_id.clone(),
            locator: locator.into(),
            message: message.into(),
            severity,
        });
    }

    pub fn messages(&self) -> &[Diagnostic] {
        &self.messages
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Info)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn into_messages(self) -> Vec<Diagnostic> {
        self.messages
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.messages.iter().filter(move |d| d.severity == severity)
    }
}
