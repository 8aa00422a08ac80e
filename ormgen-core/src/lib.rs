//! Core utilities and types for the ormgen object model generator.
//!
//! This crate answers two questions for a generated class: what its bare
//! identifier is, and where its file goes. It also carries the reserved
//! word and reserved method tables for every supported target language.

mod language;
mod names;
mod provider;
mod reserved;
mod utils;

pub use language::Language;
// Name and path resolution
pub use names::{
    DOT, NAMESPACE_SEPARATOR, PATH_SEPARATOR, bare_class_name, build_file_path,
};
pub use provider::ClassNameProvider;
pub use reserved::ReservedSet;
// String utilities
pub use utils::{to_camel_case, to_pascal_case, to_snake_case};
