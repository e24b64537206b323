//! Non-empty, ordered collection of [`Error`]s carried by a failed outcome.

use core::fmt;
use core::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The errors of a failed [`Outcome`](crate::Outcome).
///
/// Never empty: every constructor replaces an empty input with the single
/// synthetic [`Error::unknown`], so a failure without errors cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Error>", into = "Vec<Error>")]
pub struct Errors(Vec<Error>);

impl Errors {
    pub fn new(errors: impl IntoIterator<Item = Error>) -> Self {
        Self::from(errors.into_iter().collect::<Vec<_>>())
    }

    pub fn single(error: Error) -> Self {
        Self(vec![error])
    }

    pub fn first(&self) -> &Error {
        &self.0[0]
    }

    pub fn as_slice(&self) -> &[Error] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Error> {
        self.0
    }
}

impl From<Vec<Error>> for Errors {
    fn from(errors: Vec<Error>) -> Self {
        if errors.is_empty() {
            tracing::warn!("failure built without errors; substituting unknown error");
            return Self::single(Error::unknown());
        }
        Self(errors)
    }
}

impl From<Error> for Errors {
    fn from(error: Error) -> Self {
        Self::single(error)
    }
}

impl<const N: usize> From<[Error; N]> for Errors {
    fn from(errors: [Error; N]) -> Self {
        Self::from(Vec::from(errors))
    }
}

impl From<Errors> for Vec<Error> {
    fn from(errors: Errors) -> Self {
        errors.0
    }
}

impl FromIterator<Error> for Errors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl Deref for Errors {
    type Target = [Error];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = core::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}
