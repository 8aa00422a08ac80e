//! Naming and placement of generated model classes.
//!
//! This crate wraps the resolution core of `ormgen-core` with what a
//! generator for a concrete target language needs.
//!
//! # Module Organization
//!
//! - [`language`] - Per-language naming conventions (NamingConvention)
//! - [`resolver`] - Class names and file paths for one target (NameResolver)
//! - [`plan`] - Everything needed to emit one class (ClassPlan)
//! - [`accessors`] - Boolean accessor naming and reserved method checks
//! - [`diagnostic`] - Lint findings and where they point (Diagnostic, Location)
//! - [`lints`] - Manifest lints built on the above

pub mod accessors;
pub mod diagnostic;
pub mod language;
pub mod lints;
pub mod plan;
pub mod resolver;

pub use accessors::{BooleanAccessor, boolean_accessor_name};
pub use diagnostic::{Diagnostic, Location, Severity};
pub use language::NamingConvention;
pub use plan::{ClassPlan, TablePlan};
pub use resolver::NameResolver;
