//! Error types.

use svg64_base64::Base64Error;
use thiserror::Error;

/// Error returned by the strict dispatcher.
///
/// `E` is the error type of the injected serializer.
#[derive(Debug, Error)]
pub enum Svg64Error<E> {
    /// The serializer failed to turn the element into markup.
    #[error("failed to serialize element: {0}")]
    Serialize(#[source] E),
    /// The input is neither markup text nor a graphics node.
    #[error("unsupported input kind: {type_name}")]
    UnsupportedInput { type_name: &'static str },
}

/// Error returned when decoding a payload or data URI back into text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error(transparent)]
    Base64(#[from] Base64Error),
    #[error("unexpected byte 0x{byte:02x} at offset {offset}")]
    InvalidByte { byte: u8, offset: usize },
    #[error("truncated sequence at offset {offset}")]
    Truncated { offset: usize },
    #[error("decoded code units are not valid UTF-16")]
    InvalidUtf16,
    #[error("missing data URI prefix")]
    MissingPrefix,
}
