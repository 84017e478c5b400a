//! svg64 - embed SVG as a base64 data URI.
//!
//! Markup text, or an element tree serialized through an injected
//! [`Serializer`], is expanded to bytes one UTF-16 code unit at a time,
//! base64 encoded, and prefixed with `data:image/svg+xml;base64,`.
//!
//! # Example
//!
//! ```
//! use svg64::{get_base64, svg64, Element, Svg64, XmlSerializer};
//!
//! assert_eq!(get_base64("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
//!
//! let circle = Element::new("svg").child(Element::new("circle").attr("r", "4"));
//! match svg64(circle, &XmlSerializer).unwrap() {
//!     Svg64::Uri(uri) => assert!(uri.starts_with("data:image/svg+xml;base64,")),
//!     Svg64::Unchanged(_) => unreachable!(),
//! }
//! ```

pub mod decode;
pub mod dispatch;
pub mod element;
pub mod error;
pub mod options;
pub mod serializer;
pub mod uri;
pub mod utf8;

pub use decode::{decode, parse_data_uri, utf8_decode};
pub use dispatch::{
    detect_input_type, svg64, svg64_strict, svg64_strict_with, svg64_with, InputType, Svg64,
    SvgInput,
};
pub use element::{Content, Element, XmlSerializer, SVG_NAMESPACE};
pub use error::{DecodeError, Svg64Error};
pub use options::{Options, Utf8Mode};
pub use serializer::Serializer;
pub use uri::{convert_element, convert_element_with, encode, encode_with, get_base64, get_base64_with, PREFIX};
pub use utf8::{
    normalize_line_endings, utf8_encode, utf8_encode_units, utf8_encode_units_with, utf8_encode_with,
};
