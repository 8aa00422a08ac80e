//! Core operations.
//!
//! This module contains the business logic for ormgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod plan;
pub mod reserved;
pub mod resolve;

pub use check::check;
pub use plan::plan;
pub use reserved::reserved;
pub use resolve::resolve;
