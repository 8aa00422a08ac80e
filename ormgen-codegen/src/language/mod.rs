//! Language-specific naming rules.
//!
//! - [`NamingConvention`] - Case rules and reserved names for a target language
//! - [`naming_for`] - Look up the convention for a [`Language`]

mod naming;

pub use naming::{GO_NAMING, NamingConvention, PHP_NAMING, RUST_NAMING, TYPESCRIPT_NAMING};
use ormgen_core::Language;

/// Get the naming convention for a language.
pub fn naming_for(language: Language) -> &'static NamingConvention {
    match language {
        Language::Php => &PHP_NAMING,
        Language::Rust => &RUST_NAMING,
        Language::TypeScript => &TYPESCRIPT_NAMING,
        Language::Go => &GO_NAMING,
    }
}
