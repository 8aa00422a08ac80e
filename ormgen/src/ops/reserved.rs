//! Reserved operation - reserved words and methods of a language.

use ormgen_core::Language;

use crate::reports::{ReservedKind, ReservedReport};

/// Execute the reserved operation.
pub fn reserved(language: Language, methods: bool, name: Option<&str>) -> ReservedReport {
    let (kind, set) = if methods {
        (ReservedKind::Methods, language.reserved_methods())
    } else {
        (ReservedKind::Words, language.reserved_words())
    };

    ReservedReport {
        language,
        kind,
        query: name.map(|n| (n.to_string(), set.contains(n))),
        set,
    }
}
