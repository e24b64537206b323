//! Standard and URL-safe base64.
//!
//! The URL-safe form is derived from the standard alphabet: encode, strip the
//! trailing `=` padding, then substitute `+` → `-` and `/` → `_`. Decoding
//! reverses the substitutions and restores padding from `len % 4`.
//!
//! Decoding is lenient in two ways: ASCII whitespace is skipped, and non-zero
//! unused bits in the last symbol are ignored (`"AB=="` decodes to `[0]`).

use ::base64::Engine as _;
use ::base64::alphabet;
use ::base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};

use crate::error::CodecResult;

const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

pub fn to_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

pub fn from_base64(input: &str) -> CodecResult<Vec<u8>> {
    let compact: String = input.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    LENIENT.decode(compact).map_err(|e| {
        tracing::debug!(error = %e, len = input.len(), "base64 decode failed");
        e.into()
    })
}

pub fn to_base64_url(bytes: &[u8]) -> String {
    to_base64(bytes)
        .trim_end_matches('=')
        .replace('+', "-")
        .replace('/', "_")
}

pub fn from_base64_url(input: &str) -> CodecResult<Vec<u8>> {
    let mut standard = input.replace('-', "+").replace('_', "/");
    match standard.len() % 4 {
        2 => standard.push_str("=="),
        3 => standard.push('='),
        _ => {}
    }
    from_base64(&standard)
}

/// Encoding shorthand for anything byte-like.
pub trait Base64Ext {
    fn to_base64(&self) -> String;
    fn to_base64_url(&self) -> String;
}

impl<T: AsRef<[u8]> + ?Sized> Base64Ext for T {
    fn to_base64(&self) -> String {
        to_base64(self.as_ref())
    }

    fn to_base64_url(&self) -> String {
        to_base64_url(self.as_ref())
    }
}
