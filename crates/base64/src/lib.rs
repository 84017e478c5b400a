//! Standard base64 encoding and decoding.
//!
//! The encoder maps an arbitrary byte sequence onto the RFC 4648 standard
//! alphabet (`A-Z`, `a-z`, `0-9`, `+`, `/`) with `=` padding. Output length is
//! always `ceil(n / 3) * 4` for `n` input bytes.
//!
//! # Example
//!
//! ```
//! use svg64_base64::{from_base64, to_base64};
//!
//! let encoded = to_base64(b"<svg/>");
//! assert_eq!(encoded, "PHN2Zy8+");
//! assert_eq!(from_base64(&encoded).unwrap(), b"<svg/>");
//! ```

mod constants;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::from_base64;
pub use to_base64::{encoded_len, to_base64};

use thiserror::Error;

/// Error type for base64 decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input string contains a symbol outside the alphabet, or padding
    /// in a position other than the end of the last quartet.
    #[error("INVALID_BASE64_STRING")]
    InvalidBase64String,
    /// The base64 string length must be a multiple of 4.
    #[error("Base64 string length must be a multiple of 4")]
    InvalidLength,
}
