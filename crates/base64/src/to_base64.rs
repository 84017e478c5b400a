//! Standard base64 encoding function.

use crate::constants::{ALPHABET_BYTES, PAD};

#[inline]
fn symbol(sextet: u8) -> char {
    ALPHABET_BYTES[(sextet & 0b11_1111) as usize] as char
}

/// Returns the encoded length for `length` input bytes: `ceil(length / 3) * 4`.
///
/// # Example
///
/// ```
/// use svg64_base64::encoded_len;
///
/// assert_eq!(encoded_len(0), 0);
/// assert_eq!(encoded_len(1), 4);
/// assert_eq!(encoded_len(3), 4);
/// assert_eq!(encoded_len(4), 8);
/// ```
pub const fn encoded_len(length: usize) -> usize {
    length.div_ceil(3) * 4
}

/// Encodes a byte slice to a standard base64 string with padding.
///
/// Bytes are consumed in groups of three. A trailing group of two bytes
/// produces three symbols and one `=`; a trailing single byte produces two
/// symbols and `==`.
///
/// # Example
///
/// ```
/// use svg64_base64::to_base64;
///
/// assert_eq!(to_base64(b"A"), "QQ==");
/// assert_eq!(to_base64(b"AB"), "QUI=");
/// assert_eq!(to_base64(b"ABC"), "QUJD");
/// ```
pub fn to_base64(uint8: &[u8]) -> String {
    let length = uint8.len();
    let mut out = String::with_capacity(encoded_len(length));

    let extra_length = length % 3;
    let base_length = length - extra_length;

    let mut i = 0;
    while i < base_length {
        let b0 = uint8[i];
        let b1 = uint8[i + 1];
        let b2 = uint8[i + 2];

        out.push(symbol(b0 >> 2));
        out.push(symbol(((b0 & 3) << 4) | (b1 >> 4)));
        out.push(symbol(((b1 & 15) << 2) | (b2 >> 6)));
        out.push(symbol(b2 & 63));
        i += 3;
    }

    match extra_length {
        1 => {
            let b0 = uint8[base_length];
            out.push(symbol(b0 >> 2));
            out.push(symbol((b0 & 3) << 4));
            out.push(PAD);
            out.push(PAD);
        }
        2 => {
            let b0 = uint8[base_length];
            let b1 = uint8[base_length + 1];
            out.push(symbol(b0 >> 2));
            out.push(symbol(((b0 & 3) << 4) | (b1 >> 4)));
            out.push(symbol((b1 & 15) << 2));
            out.push(PAD);
        }
        _ => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(to_base64(b""), "");
    }

    #[test]
    fn test_single_byte() {
        assert_eq!(to_base64(b"A"), "QQ==");
    }

    #[test]
    fn test_two_bytes() {
        assert_eq!(to_base64(b"AB"), "QUI=");
    }

    #[test]
    fn test_three_bytes() {
        assert_eq!(to_base64(b"ABC"), "QUJD");
    }

    #[test]
    fn test_rfc4648_vectors() {
        assert_eq!(to_base64(b"f"), "Zg==");
        assert_eq!(to_base64(b"fo"), "Zm8=");
        assert_eq!(to_base64(b"foo"), "Zm9v");
        assert_eq!(to_base64(b"foob"), "Zm9vYg==");
        assert_eq!(to_base64(b"fooba"), "Zm9vYmE=");
        assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_high_bytes_use_standard_alphabet() {
        // 0xfb 0xff -> "+/8=" in the standard alphabet, "-_8" in the URL-safe one
        assert_eq!(to_base64(&[0xfb, 0xff]), "+/8=");
        assert_eq!(to_base64(&[0xff, 0xff, 0xff]), "////");
    }

    #[test]
    fn test_output_length() {
        for n in 0..32 {
            let data = vec![0x5a; n];
            assert_eq!(to_base64(&data).len(), encoded_len(n));
        }
    }

    #[test]
    fn test_binary_data() {
        let data: Vec<u8> = (0..=255).collect();
        let encoded = to_base64(&data);
        for c in encoded.chars() {
            assert!(
                c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=',
                "Invalid base64 character: {}",
                c
            );
        }
    }
}
