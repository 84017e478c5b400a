//! Reverse pipeline: data URI -> base64 payload -> bytes -> code units -> text.

use svg64_base64::from_base64;

use crate::error::DecodeError;
use crate::uri::PREFIX;

#[inline]
fn continuation(bytes: &[u8], offset: usize) -> Result<u16, DecodeError> {
    match bytes.get(offset) {
        Some(&byte) if byte & 0xc0 == 0x80 => Ok((byte & 0x3f) as u16),
        Some(&byte) => Err(DecodeError::InvalidByte { byte, offset }),
        None => Err(DecodeError::Truncated { offset }),
    }
}

/// Inverts the per-code-unit expansion, yielding UTF-16 code units.
///
/// Four-byte sequences are rejected: this decoder only understands the
/// one to three byte forms produced per code unit.
///
/// # Example
///
/// ```
/// use svg64::{utf8_decode, utf8_encode_units};
///
/// let units = [0x41, 0xe9, 0xd83d, 0xde00];
/// assert_eq!(utf8_decode(&utf8_encode_units(&units)).unwrap(), units);
/// ```
pub fn utf8_decode(bytes: &[u8]) -> Result<Vec<u16>, DecodeError> {
    let mut units = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i];
        match b0 {
            0x00..=0x7f => {
                units.push(b0 as u16);
                i += 1;
            }
            0xc0..=0xdf => {
                let c1 = continuation(bytes, i + 1)?;
                units.push((((b0 & 0x1f) as u16) << 6) | c1);
                i += 2;
            }
            0xe0..=0xef => {
                let c1 = continuation(bytes, i + 1)?;
                let c2 = continuation(bytes, i + 2)?;
                units.push((((b0 & 0x0f) as u16) << 12) | (c1 << 6) | c2);
                i += 3;
            }
            _ => return Err(DecodeError::InvalidByte { byte: b0, offset: i }),
        }
    }
    Ok(units)
}

/// Decodes a base64 payload produced by [`encode`](crate::encode) back into text.
///
/// # Example
///
/// ```
/// use svg64::{decode, encode};
///
/// assert_eq!(decode(&encode("Größe 😀")).unwrap(), "Größe 😀");
/// ```
pub fn decode(payload: &str) -> Result<String, DecodeError> {
    let bytes = from_base64(payload)?;
    let units = utf8_decode(&bytes)?;
    String::from_utf16(&units).map_err(|_| DecodeError::InvalidUtf16)
}

/// Extracts the markup from a data URI produced by [`get_base64`](crate::get_base64).
///
/// # Example
///
/// ```
/// use svg64::{get_base64, parse_data_uri};
///
/// assert_eq!(parse_data_uri(&get_base64("<svg/>")).unwrap(), "<svg/>");
/// ```
pub fn parse_data_uri(uri: &str) -> Result<String, DecodeError> {
    let payload = uri.strip_prefix(PREFIX).ok_or(DecodeError::MissingPrefix)?;
    decode(payload)
}
