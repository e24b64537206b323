//! Three-state optional value: missing, explicit null, or a value.

use core::fmt;

/// Which of the three states an [`Optional`] is in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum OptionalState {
    Missing,
    Null,
    Value,
}

/// A value that may be missing, explicitly null, or present.
///
/// Intended for partial-update payloads, where "field not provided",
/// "field cleared" and "field set" must stay distinguishable. The default is
/// `Missing`, so a field left untouched (or absent from the input, with
/// `#[serde(default)]`) reads as not provided.
///
/// ```
/// use railyard_serialization::{Optional, OptionalState};
///
/// assert_eq!(Optional::<i32>::default().state(), OptionalState::Missing);
/// assert_eq!(Optional::from(None::<i32>), Optional::null());
/// assert_eq!(Optional::from(Some(5)).get(), Some(&5));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Optional<T> {
    /// Not provided.
    Missing,
    /// Explicitly cleared.
    Null,
    /// Provided with a value.
    Value(T),
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::Missing
    }
}

impl<T> Optional<T> {
    pub const fn missing() -> Self {
        Self::Missing
    }

    pub const fn null() -> Self {
        Self::Null
    }

    /// `Null` when `value` is absent, otherwise `Value`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }

    pub fn state(&self) -> OptionalState {
        match self {
            Self::Missing => OptionalState::Missing,
            Self::Null => OptionalState::Null,
            Self::Value(_) => OptionalState::Value,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// True for `Null` and `Value`.
    pub fn is_specified(&self) -> bool {
        !self.is_missing()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn has_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Borrow the value.
    ///
    /// # Panics
    ///
    /// Panics when the optional is `Missing` or `Null`.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Value(value) => value,
            _ => panic!("value is not set (missing or null)"),
        }
    }

    /// The value, if any. `None` for both `Missing` and `Null`.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// `None` for `Missing`, `Some(None)` for `Null`, `Some(Some(v))` for a value.
    pub fn into_nullable(self) -> Option<Option<T>> {
        match self {
            Self::Missing => None,
            Self::Null => Some(None),
            Self::Value(value) => Some(Some(value)),
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Missing => Optional::Missing,
            Self::Null => Optional::Null,
            Self::Value(value) => Optional::Value(value),
        }
    }

    /// Transform the value; `Missing` and `Null` are kept as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Optional<U> {
        match self {
            Self::Missing => Optional::Missing,
            Self::Null => Optional::Null,
            Self::Value(value) => Optional::Value(f(value)),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<missing>"),
            Self::Null => f.write_str("null"),
            Self::Value(value) => fmt::Display::fmt(value, f),
        }
    }
}
