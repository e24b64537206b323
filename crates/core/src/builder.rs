//! Incremental accumulation of errors into a failed outcome.

use crate::error::{Error, ErrorType};
use crate::errors::Errors;
use crate::outcome::Outcome;

/// Collects errors one at a time (or in batches) and finalizes them into a
/// failed [`Outcome`].
///
/// Building with nothing collected yields the single [`Error::unknown`].
#[derive(Debug, Clone, Default)]
pub struct FailureBuilder {
    errors: Vec<Error>,
}

impl FailureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            errors: Vec::with_capacity(capacity),
        }
    }

    pub fn add_error(&mut self, error: Error) -> &mut Self {
        self.errors.push(error);
        self
    }

    pub fn add(
        &mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        error_type: ErrorType,
    ) -> &mut Self {
        self.add_error(Error::new(code, message, error_type))
    }

    pub fn add_with_details(
        &mut self,
        code: impl Into<String>,
        message: impl Into<String>,
        error_type: ErrorType,
        details: serde_json::Value,
    ) -> &mut Self {
        self.add_error(Error::new(code, message, error_type).with_details(details))
    }

    pub fn add_errors(&mut self, errors: impl IntoIterator<Item = Error>) -> &mut Self {
        self.errors.extend(errors);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.errors.clear();
        self
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Finalize into a failure. The builder keeps its errors and can be reused.
    pub fn build<T>(&self) -> Outcome<T> {
        tracing::trace!(errors = self.errors.len(), "building failed outcome");
        Err(Errors::from(self.errors.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes;
    use crate::outcome::OutcomeExt;

    #[test]
    fn empty_builder_builds_unknown() {
        let res: Outcome = FailureBuilder::new().build();

        assert_eq!(res.errors().len(), 1);
        assert_eq!(res.errors()[0].code(), codes::UNKNOWN);
    }

    #[test]
    fn accumulates_single_and_batch_errors_in_order() {
        let mut builder = FailureBuilder::with_capacity(3);
        builder
            .add(codes::VALIDATION_REQUIRED, "name is required", ErrorType::Validation)
            .add_errors([
                Error::conflict(codes::CONFLICT, "duplicate sku"),
                Error::not_found(codes::NOT_FOUND, "category missing"),
            ]);

        let res: Outcome<u32> = builder.build();
        let seen: Vec<_> = res.errors().iter().map(Error::code).collect();

        assert_eq!(
            seen,
            vec![codes::VALIDATION_REQUIRED, codes::CONFLICT, codes::NOT_FOUND]
        );
    }

    #[test]
    fn add_with_details_keeps_details() {
        let mut builder = FailureBuilder::new();
        builder.add_with_details(
            codes::VALIDATION_FORMAT,
            "bad email",
            ErrorType::Validation,
            serde_json::json!({ "field": "email" }),
        );

        let res: Outcome = builder.build();
        assert_eq!(
            res.errors()[0].details(),
            Some(&serde_json::json!({ "field": "email" }))
        );
    }

    #[test]
    fn clear_resets_to_unknown() {
        let mut builder = FailureBuilder::new();
        builder.add_error(Error::forbidden(codes::FORBIDDEN, "nope"));
        assert_eq!(builder.len(), 1);

        builder.clear();
        assert!(builder.is_empty());

        let res: Outcome = builder.build();
        assert_eq!(res.errors(), &[Error::unknown()]);
    }

    #[test]
    fn build_is_repeatable() {
        let mut builder = FailureBuilder::new();
        builder.add_error(Error::failure("x", "boom"));

        let first: Outcome<i32> = builder.build();
        let second: Outcome<String> = builder.build();

        assert_eq!(first.errors(), second.errors());
    }
}
