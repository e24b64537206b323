//! Comprehension syntax over [`Outcome`](crate::Outcome).
//!
//! ```
//! use railyard_core::{query, success_with, OutcomeExt};
//!
//! let total = query! {
//!     from x in success_with(2);
//!     from y in success_with(10);
//!     where x < y;
//!     select x + y
//! };
//! assert_eq!(*total.value(), 12);
//! ```
//!
//! Clauses:
//! - `from <pat> in <outcome>;` binds the success payload (desugars to `bind`).
//! - `let <pat> = <expr>;` introduces a plain binding.
//! - `where <bool>;` rejects with [`Error::predicate_failed`](crate::Error::predicate_failed),
//!   the same error `OutcomeExt::filter` uses.
//! - `select <expr>` ends the chain with a success.
//!
//! Every step after a `from` is evaluated lazily, so a failing step
//! short-circuits the rest and only its errors surface.

#[macro_export]
macro_rules! query {
    (select $value:expr $(;)?) => {
        ::core::result::Result::<_, $crate::Errors>::Ok($value)
    };
    (from $p:pat_param in $source:expr; $($rest:tt)+) => {
        $crate::OutcomeExt::bind($source, move |$p| $crate::query!($($rest)+))
    };
    (let $p:pat_param = $value:expr; $($rest:tt)+) => {{
        let $p = $value;
        $crate::query!($($rest)+)
    }};
    (where $cond:expr; $($rest:tt)+) => {
        if $cond {
            $crate::query!($($rest)+)
        } else {
            ::core::result::Result::Err($crate::Errors::from($crate::Error::predicate_failed()))
        }
    };
}
