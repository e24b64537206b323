//! `railyard-data` — stateless binary/text codec helpers.

pub mod base64;
pub mod error;

pub use crate::base64::{Base64Ext, from_base64, from_base64_url, to_base64, to_base64_url};
pub use crate::error::{CodecError, CodecResult};
