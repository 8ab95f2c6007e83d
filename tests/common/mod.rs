//! Shared test utilities for feedstore integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. The assertion macros are `#[macro_export]`ed and
//! available crate-wide once this module is declared.

pub mod assertions;
pub mod builders;

pub use builders::*;
