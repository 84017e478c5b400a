//! Base64 payload and data URI construction.

use svg64_base64::to_base64;

use crate::options::Options;
use crate::serializer::Serializer;
use crate::utf8::{utf8_encode, utf8_encode_with};

/// Scheme prefix of every data URI produced by this crate.
pub const PREFIX: &str = "data:image/svg+xml;base64,";

/// Encodes text to base64, expanding it with [`utf8_encode`] first.
///
/// # Example
///
/// ```
/// use svg64::encode;
///
/// assert_eq!(encode("A"), "QQ==");
/// assert_eq!(encode("AB"), "QUI=");
/// assert_eq!(encode("ABC"), "QUJD");
/// ```
pub fn encode(text: &str) -> String {
    to_base64(&utf8_encode(text))
}

/// Encodes text to base64 using the given options.
pub fn encode_with(text: &str, options: &Options) -> String {
    to_base64(&utf8_encode_with(text, options.mode))
}

/// Builds an `image/svg+xml` data URI from markup text.
///
/// # Example
///
/// ```
/// use svg64::get_base64;
///
/// assert_eq!(get_base64("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
/// assert_eq!(get_base64(""), "data:image/svg+xml;base64,");
/// ```
pub fn get_base64(text: &str) -> String {
    with_prefix(&encode(text))
}

/// Builds a data URI from markup text using the given options.
pub fn get_base64_with(text: &str, options: &Options) -> String {
    with_prefix(&encode_with(text, options))
}

/// Serializes `node` and builds a data URI from the resulting markup.
///
/// Serializer failures are returned unchanged.
pub fn convert_element<S: Serializer>(node: &S::Node, serializer: &S) -> Result<String, S::Error> {
    convert_element_with(node, serializer, &Options::default())
}

/// Serializes `node` and builds a data URI using the given options.
pub fn convert_element_with<S: Serializer>(
    node: &S::Node,
    serializer: &S,
    options: &Options,
) -> Result<String, S::Error> {
    let markup = serializer.serialize(node)?;
    Ok(get_base64_with(&markup, options))
}

fn with_prefix(payload: &str) -> String {
    let mut uri = String::with_capacity(PREFIX.len() + payload.len());
    uri.push_str(PREFIX);
    uri.push_str(payload);
    uri
}
