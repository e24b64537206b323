//! Railway-oriented outcome model and its composition algebra.
//!
//! An [`Outcome<T>`] is a plain `Result<T, Errors>`: `Ok` carries the payload,
//! `Err` carries one or more [`Error`]s. Because [`Errors`] is never empty, a
//! failure always explains itself. `Outcome` (no parameter) is the
//! payload-free form used by operations that only succeed or fail.
//!
//! The standard `Result` combinators (`map`, `and_then`, `?`) apply as-is;
//! [`OutcomeExt`] adds the rest of the algebra: `bind`, `fold`, `tap`,
//! `ensure`, `filter` and the comprehension building blocks.

use crate::error::{Error, ErrorType};
use crate::errors::Errors;

/// Success payload `T` or a non-empty list of errors.
pub type Outcome<T = ()> = Result<T, Errors>;

/// Payload-free success.
pub fn success() -> Outcome {
    Ok(())
}

/// Success carrying `value`.
pub fn success_with<T>(value: T) -> Outcome<T> {
    Ok(value)
}

/// Failure carrying `errors`. An empty set is replaced by [`Error::unknown`].
pub fn fail<T>(errors: impl Into<Errors>) -> Outcome<T> {
    Err(errors.into())
}

/// Failure carrying a single error built from its parts.
pub fn fail_with<T>(
    code: impl Into<String>,
    message: impl Into<String>,
    error_type: ErrorType,
) -> Outcome<T> {
    fail(Error::new(code, message, error_type))
}

/// [`fail_with`] plus structured detail on the error.
pub fn fail_with_details<T>(
    code: impl Into<String>,
    message: impl Into<String>,
    error_type: ErrorType,
    details: serde_json::Value,
) -> Outcome<T> {
    fail(Error::new(code, message, error_type).with_details(details))
}

/// Reduce many outcomes into one payload-free outcome.
///
/// Succeeds iff every input succeeded (including when there are no inputs).
/// Otherwise fails with the errors of every failing input, concatenated in
/// input order.
pub fn combine<T>(outcomes: impl IntoIterator<Item = Outcome<T>>) -> Outcome {
    let mut collected: Vec<Error> = Vec::new();
    let mut inputs = 0usize;
    let mut failed = 0usize;

    for outcome in outcomes {
        inputs += 1;
        if let Err(errors) = outcome {
            failed += 1;
            collected.extend(errors);
        }
    }

    tracing::debug!(inputs, failed, errors = collected.len(), "combined outcomes");

    if failed == 0 {
        return success();
    }
    fail(collected)
}

/// Composition algebra for [`Outcome`].
pub trait OutcomeExt<T>: Sized {
    fn is_success(&self) -> bool;

    /// Borrow the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure. Reading the payload of a failure is
    /// a caller bug, not a domain failure.
    fn value(&self) -> &T;

    /// Errors of a failure; empty on success.
    fn errors(&self) -> &[Error];

    /// Replace the success payload with `value`, keeping failures as-is.
    fn map_to<U>(self, value: U) -> Outcome<U>;

    /// Chain the next outcome-producing step. Never invoked on failure.
    fn bind<U>(self, next: impl FnOnce(T) -> Outcome<U>) -> Outcome<U>;

    /// Reduce to a single value; exactly one handler runs.
    fn fold<R>(self, ok: impl FnOnce(T) -> R, fail: impl FnOnce(Errors) -> R) -> R;

    /// Observe the payload on success. Returns the outcome unchanged.
    fn tap(self, on_success: impl FnOnce(&T)) -> Self;

    /// Observe the errors on failure. Returns the outcome unchanged.
    fn tap_error(self, on_failure: impl FnOnce(&Errors)) -> Self;

    /// Turn a success into a failure with `error` when `predicate` rejects the
    /// payload. The predicate is not evaluated on failure.
    fn ensure(self, predicate: impl FnOnce(&T) -> bool, error: Error) -> Self;

    /// Like [`ensure`](Self::ensure), building the error from the rejected
    /// payload only when needed.
    fn ensure_else(
        self,
        predicate: impl FnOnce(&T) -> bool,
        make_error: impl FnOnce(&T) -> Error,
    ) -> Self;

    /// [`ensure`](Self::ensure) with [`Error::predicate_failed`] as the error.
    fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self;

    /// Comprehension projection; same as `map`.
    fn select<U>(self, selector: impl FnOnce(T) -> U) -> Outcome<U>;

    /// Comprehension step: bind to `binder`, then project both payloads.
    fn select_many<M, U>(
        self,
        binder: impl FnOnce(&T) -> Outcome<M>,
        projector: impl FnOnce(T, M) -> U,
    ) -> Outcome<U>;
}

impl<T> OutcomeExt<T> for Outcome<T> {
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[track_caller]
    fn value(&self) -> &T {
        match self {
            Ok(value) => value,
            Err(errors) => panic!("outcome has no value: failed with {errors}"),
        }
    }

    fn errors(&self) -> &[Error] {
        match self {
            Ok(_) => &[],
            Err(errors) => errors.as_slice(),
        }
    }

    fn map_to<U>(self, value: U) -> Outcome<U> {
        self.map(|_| value)
    }

    fn bind<U>(self, next: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Ok(value) => next(value),
            Err(errors) => Err(errors),
        }
    }

    fn fold<R>(self, ok: impl FnOnce(T) -> R, fail: impl FnOnce(Errors) -> R) -> R {
        match self {
            Ok(value) => ok(value),
            Err(errors) => fail(errors),
        }
    }

    fn tap(self, on_success: impl FnOnce(&T)) -> Self {
        if let Ok(value) = &self {
            on_success(value);
        }
        self
    }

    fn tap_error(self, on_failure: impl FnOnce(&Errors)) -> Self {
        if let Err(errors) = &self {
            on_failure(errors);
        }
        self
    }

    fn ensure(self, predicate: impl FnOnce(&T) -> bool, error: Error) -> Self {
        self.ensure_else(predicate, |_| error)
    }

    fn ensure_else(
        self,
        predicate: impl FnOnce(&T) -> bool,
        make_error: impl FnOnce(&T) -> Error,
    ) -> Self {
        match self {
            Ok(value) => {
                if predicate(&value) {
                    Ok(value)
                } else {
                    fail(make_error(&value))
                }
            }
            Err(errors) => Err(errors),
        }
    }

    fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        self.ensure_else(predicate, |_| Error::predicate_failed())
    }

    fn select<U>(self, selector: impl FnOnce(T) -> U) -> Outcome<U> {
        self.map(selector)
    }

    fn select_many<M, U>(
        self,
        binder: impl FnOnce(&T) -> Outcome<M>,
        projector: impl FnOnce(T, M) -> U,
    ) -> Outcome<U> {
        self.bind(|x| binder(&x).map(|y| projector(x, y)))
    }
}
