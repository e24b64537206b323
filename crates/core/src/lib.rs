//! `railyard-core` — railway-oriented outcome model.
//!
//! This crate contains **pure value** primitives (no I/O, no shared state):
//! the [`Error`] value, the non-empty [`Errors`] list, the [`Outcome`]
//! result type with its composition algebra, and the [`query!`] comprehension
//! macro.

pub mod builder;
pub mod codes;
pub mod error;
pub mod errors;
pub mod outcome;
mod query;

pub use builder::FailureBuilder;
pub use error::{Error, ErrorType};
pub use errors::Errors;
pub use outcome::{
    Outcome, OutcomeExt, combine, fail, fail_with, fail_with_details, success, success_with,
};
