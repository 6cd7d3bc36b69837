use oav_core::Verb;

/// Accepted operationId prefixes on collection paths (no trailing parameter).
const COLLECTION_PREFIXES: &[(Verb, &[&str])] = &[
    (Verb::Get, &["list"]),
    (Verb::Post, &["add", "create"]),
];

/// Accepted operationId prefixes on member paths (trailing parameter).
const MEMBER_PREFIXES: &[(Verb, &[&str])] = &[
    (Verb::Get, &["get"]),
    (Verb::Delete, &["delete"]),
    (Verb::Patch, &["update"]),
    // POST is only held to "update" when the path has no PATCH
    (Verb::Post, &["update"]),
    (Verb::Put, &["replace"]),
];

fn lookup(table: &'static [(Verb, &'static [&'static str])], verb: Verb) -> Option<&'static [&'static str]> {
    table.iter().find(|(v, _)| *v == verb).map(|(_, prefixes)| *prefixes)
}

/// Accepted prefixes for `verb`, or `None` when the verb is unconstrained.
pub fn allowed_prefixes(verb: Verb, path_ends_with_param: bool) -> Option<&'static [&'static str]> {
    if path_ends_with_param {
        lookup(MEMBER_PREFIXES, verb)
    } else {
        lookup(COLLECTION_PREFIXES, verb)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConventionCheck {
    pub passed: bool,
    /// Prefixes the operationId should have started with; empty on success.
    pub allowed_prefixes: &'static [&'static str],
}

impl ConventionCheck {
    const PASS: ConventionCheck = ConventionCheck {
        passed: true,
        allowed_prefixes: &[],
    };

    /// `"add or create"`, for the diagnostic text.
    pub fn expected(&self) -> String {
        self.allowed_prefixes.join(" or ")
    }
}

pub fn check_convention(
    verb: Verb,
    operation_id: &str,
    path_operations: &[Verb],
    path_ends_with_param: bool,
) -> ConventionCheck {
    let Some(prefixes) = allowed_prefixes(verb, path_ends_with_param) else {
        return ConventionCheck::PASS;
    };

    if prefixes.iter().any(|p| operation_id.starts_with(p)) {
        return ConventionCheck::PASS;
    }

    if verb == Verb::Post && path_ends_with_param && path_operations.contains(&Verb::Patch) {
        return ConventionCheck::PASS;
    }

    ConventionCheck {
        passed: false,
        allowed_prefixes: prefixes,
    }
}
