//! serde adapter for [`Optional`].
//!
//! Write: `Missing` and `Null` are written as the format's null marker,
//! `Value(v)` delegates to `v`'s own serializer.
//!
//! Read: a null token becomes `Null`; anything else is read as `T` and
//! wrapped in `Value`. `Missing` is never produced here. It comes from the
//! *absence* of a field, which serde only maps to `Missing` when the field is
//! declared with `#[serde(default)]` (without it, serde feeds an absent field
//! through `deserialize_option` and the result would be `Null`).
//!
//! Omitting `Missing` fields on write is the container's policy, not the
//! adapter's:
//!
//! ```
//! use railyard_serialization::Optional;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct PatchProduct {
//!     #[serde(default, skip_serializing_if = "Optional::is_missing")]
//!     name: Optional<String>,
//! }
//!
//! let patch = PatchProduct { name: Optional::null() };
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"name":null}"#);
//!
//! let patch = PatchProduct { name: Optional::missing() };
//! assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
//! ```
//!
//! At the document root there is no field to omit, so a root `Missing`
//! writes `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::optional::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Optional::Missing | Optional::Null => serializer.serialize_none(),
            Optional::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Optional::from_option)
    }
}
