//! Encoding options.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How text is expanded into bytes before base64 encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Utf8Mode {
    /// Every UTF-16 code unit is encoded on its own; surrogate pairs become
    /// two three-byte sequences.
    #[default]
    CodeUnit,
    /// Standard UTF-8.
    Canonical,
}

/// Options accepted by the `*_with` entry points.
///
/// # Example
///
/// ```
/// use svg64::{get_base64_with, Options, Utf8Mode};
///
/// let options = Options::new().mode(Utf8Mode::Canonical);
/// assert_eq!(get_base64_with("😀", &options), "data:image/svg+xml;base64,8J+YgA==");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub mode: Utf8Mode,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the byte expansion mode.
    pub fn mode(mut self, mode: Utf8Mode) -> Self {
        self.mode = mode;
        self
    }
}
