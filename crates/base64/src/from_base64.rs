//! Strict standard base64 decoding.

use crate::constants::{ALPHABET_BYTES, PAD_BYTE};
use crate::Base64Error;

const INVALID: u8 = 0xff;

/// Reverse lookup: symbol byte -> sextet, `INVALID` for non-alphabet bytes.
static TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[inline]
fn sextet(byte: u8) -> Result<u8, Base64Error> {
    match TABLE[byte as usize] {
        INVALID => Err(Base64Error::InvalidBase64String),
        v => Ok(v),
    }
}

/// Decodes a padded standard base64 string into bytes.
///
/// The input length must be a multiple of 4 and `=` may only appear as the
/// last one or two symbols.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] if the length is not a multiple of 4
/// and [`Base64Error::InvalidBase64String`] for symbols outside the alphabet
/// or misplaced padding.
///
/// # Example
///
/// ```
/// use svg64_base64::from_base64;
///
/// assert_eq!(from_base64("QUI=").unwrap(), b"AB");
/// assert!(from_base64("QUI").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = encoded.as_bytes();
    let length = bytes.len();
    if length == 0 {
        return Ok(Vec::new());
    }
    if length % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }

    let padding = if bytes[length - 2] == PAD_BYTE {
        2
    } else if bytes[length - 1] == PAD_BYTE {
        1
    } else {
        0
    };
    let main_length = if padding > 0 { length - 4 } else { length };

    let mut buf = Vec::with_capacity((length >> 2) * 3 - padding);
    let mut i = 0;
    while i < main_length {
        let s0 = sextet(bytes[i])?;
        let s1 = sextet(bytes[i + 1])?;
        let s2 = sextet(bytes[i + 2])?;
        let s3 = sextet(bytes[i + 3])?;
        buf.push((s0 << 2) | (s1 >> 4));
        buf.push((s1 << 4) | (s2 >> 2));
        buf.push((s2 << 6) | s3);
        i += 4;
    }

    match padding {
        2 => {
            if bytes[length - 1] != PAD_BYTE {
                return Err(Base64Error::InvalidBase64String);
            }
            let s0 = sextet(bytes[main_length])?;
            let s1 = sextet(bytes[main_length + 1])?;
            buf.push((s0 << 2) | (s1 >> 4));
        }
        1 => {
            let s0 = sextet(bytes[main_length])?;
            let s1 = sextet(bytes[main_length + 1])?;
            let s2 = sextet(bytes[main_length + 2])?;
            buf.push((s0 << 2) | (s1 >> 4));
            buf.push((s1 << 4) | (s2 >> 2));
        }
        _ => {}
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(from_base64("").unwrap(), b"");
    }

    #[test]
    fn test_padding_variants() {
        assert_eq!(from_base64("QQ==").unwrap(), b"A");
        assert_eq!(from_base64("QUI=").unwrap(), b"AB");
        assert_eq!(from_base64("QUJD").unwrap(), b"ABC");
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(from_base64("QUJ"), Err(Base64Error::InvalidLength));
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(from_base64("QU-D"), Err(Base64Error::InvalidBase64String));
    }

    #[test]
    fn test_padding_in_the_middle() {
        assert_eq!(
            from_base64("QQ==QUJD"),
            Err(Base64Error::InvalidBase64String)
        );
        assert_eq!(from_base64("Q=Q="), Err(Base64Error::InvalidBase64String));
    }
}
