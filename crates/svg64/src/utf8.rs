//! UTF-8 style byte expansion of UTF-16 code units.
//!
//! The default [`Utf8Mode::CodeUnit`] expansion encodes every 16-bit code
//! unit on its own. Characters outside the Basic Multilingual Plane are two
//! surrogate code units, so they come out as two three-byte sequences rather
//! than one four-byte sequence. Output produced this way must stay bit-exact
//! with existing data URIs; use [`Utf8Mode::Canonical`] for standard UTF-8.

use crate::options::Utf8Mode;

const CR: u16 = 0x0d;
const LF: u16 = 0x0a;

/// Collapses every CRLF pair into a single LF.
///
/// A lone CR is left untouched.
///
/// # Example
///
/// ```
/// use svg64::normalize_line_endings;
///
/// let units: Vec<u16> = "a\r\nb\rc".encode_utf16().collect();
/// let expected: Vec<u16> = "a\nb\rc".encode_utf16().collect();
/// assert_eq!(normalize_line_endings(&units), expected);
/// ```
pub fn normalize_line_endings(units: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(units.len());
    let mut i = 0;
    while i < units.len() {
        let c = units[i];
        if c == CR && units.get(i + 1) == Some(&LF) {
            out.push(LF);
            i += 2;
            continue;
        }
        out.push(c);
        i += 1;
    }
    out
}

/// Appends the per-code-unit expansion of `c` to `out`.
#[inline]
fn push_unit(out: &mut Vec<u8>, c: u16) {
    if c < 0x80 {
        out.push(c as u8);
    } else if c < 0x800 {
        out.push(0xc0 | (c >> 6) as u8);
        out.push(0x80 | (c & 0x3f) as u8);
    } else {
        out.push(0xe0 | (c >> 12) as u8);
        out.push(0x80 | ((c >> 6) & 0x3f) as u8);
        out.push(0x80 | (c & 0x3f) as u8);
    }
}

/// Encodes raw UTF-16 code units, one to three bytes per unit.
///
/// Lone surrogates are accepted and encoded like any other unit.
///
/// # Example
///
/// ```
/// use svg64::utf8_encode_units;
///
/// assert_eq!(utf8_encode_units(&[0x41]), [0x41]);
/// assert_eq!(utf8_encode_units(&[0xe9]), [0xc3, 0xa9]);
/// assert_eq!(utf8_encode_units(&[0xd83d]), [0xed, 0xa0, 0xbd]);
/// ```
pub fn utf8_encode_units(units: &[u16]) -> Vec<u8> {
    let units = normalize_line_endings(units);
    let mut out = Vec::with_capacity(units.len() * 3);
    for c in units {
        push_unit(&mut out, c);
    }
    out
}

/// Encodes text using the per-code-unit rule.
///
/// For ASCII-only text this is the identity on bytes.
///
/// # Example
///
/// ```
/// use svg64::utf8_encode;
///
/// assert_eq!(utf8_encode("<svg/>"), b"<svg/>");
/// assert_eq!(utf8_encode("a\r\nb"), b"a\nb");
/// ```
pub fn utf8_encode(text: &str) -> Vec<u8> {
    let units: Vec<u16> = text.encode_utf16().collect();
    utf8_encode_units(&units)
}

/// Encodes text in the requested mode.
pub fn utf8_encode_with(text: &str, mode: Utf8Mode) -> Vec<u8> {
    match mode {
        Utf8Mode::CodeUnit => utf8_encode(text),
        Utf8Mode::Canonical => text.replace("\r\n", "\n").into_bytes(),
    }
}

/// Encodes raw code units in the requested mode.
///
/// In canonical mode, lone surrogates are replaced by U+FFFD.
pub fn utf8_encode_units_with(units: &[u16], mode: Utf8Mode) -> Vec<u8> {
    match mode {
        Utf8Mode::CodeUnit => utf8_encode_units(units),
        Utf8Mode::Canonical => {
            let text = String::from_utf16_lossy(&normalize_line_endings(units));
            text.into_bytes()
        }
    }
}
