//! `railyard-serialization` — three-state optional values and their JSON bridge.
//!
//! [`Optional`] distinguishes a field that was not provided (`Missing`), one
//! that was explicitly cleared (`Null`) and one that carries a value. The
//! serde adapter in [`adapter`] maps the model onto any serde format; the
//! [`json`] helpers wrap `serde_json` with this crate's error type.

pub mod adapter;
pub mod error;
pub mod json;
pub mod optional;

pub use error::{SerializationError, SerializationResult};
pub use optional::{Optional, OptionalState};
