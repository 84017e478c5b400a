//! Input dispatch: markup goes straight to encoding, graphics nodes are
//! serialized first, anything else is passed through or rejected.

use std::any::{type_name, Any};

use log::{debug, trace};

use crate::error::Svg64Error;
use crate::options::Options;
use crate::serializer::Serializer;
use crate::uri::{convert_element_with, get_base64_with};

/// The kind of a dispatchable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Markup,
    Element,
}

/// An input whose kind is stated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvgInput<'a, N> {
    Markup(&'a str),
    Element(&'a N),
}

impl<'a, N> SvgInput<'a, N> {
    pub fn input_type(&self) -> InputType {
        match self {
            SvgInput::Markup(_) => InputType::Markup,
            SvgInput::Element(_) => InputType::Element,
        }
    }

    /// Builds the data URI, serializing the node first when needed.
    pub fn to_data_uri<S>(&self, serializer: &S) -> Result<String, S::Error>
    where
        S: Serializer<Node = N>,
    {
        self.to_data_uri_with(serializer, &Options::default())
    }

    pub fn to_data_uri_with<S>(&self, serializer: &S, options: &Options) -> Result<String, S::Error>
    where
        S: Serializer<Node = N>,
    {
        match *self {
            SvgInput::Markup(text) => Ok(get_base64_with(text, options)),
            SvgInput::Element(node) => convert_element_with(node, serializer, options),
        }
    }
}

/// Result of [`svg64`]: a data URI, or the input handed back untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Svg64<T> {
    Uri(String),
    Unchanged(T),
}

impl<T> Svg64<T> {
    pub fn uri(&self) -> Option<&str> {
        match self {
            Svg64::Uri(uri) => Some(uri),
            Svg64::Unchanged(_) => None,
        }
    }

    pub fn into_uri(self) -> Option<String> {
        match self {
            Svg64::Uri(uri) => Some(uri),
            Svg64::Unchanged(_) => None,
        }
    }
}

/// Reports whether a value is markup text or a node of type `N`.
///
/// `String` and `&'static str` count as markup. This is the only place the
/// crate inspects the concrete type of an input.
///
/// # Example
///
/// ```
/// use svg64::{detect_input_type, Element, InputType};
///
/// assert_eq!(detect_input_type::<Element>(&"<svg/>"), Some(InputType::Markup));
/// assert_eq!(detect_input_type::<Element>(&Element::new("svg")), Some(InputType::Element));
/// assert_eq!(detect_input_type::<Element>(&42), None);
/// ```
pub fn detect_input_type<N: Any>(input: &dyn Any) -> Option<InputType> {
    if input.is::<String>() || input.is::<&'static str>() {
        Some(InputType::Markup)
    } else if input.is::<N>() {
        Some(InputType::Element)
    } else {
        None
    }
}

fn markup(input: &dyn Any) -> Option<&str> {
    input
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| input.downcast_ref::<&'static str>().copied())
}

/// Routes `input` by kind and builds a data URI.
///
/// Values that are neither markup nor a `S::Node` are returned as
/// [`Svg64::Unchanged`]. Serializer failures are returned unchanged.
///
/// # Example
///
/// ```
/// use svg64::{svg64, Svg64, XmlSerializer};
///
/// let uri = svg64("<svg/>", &XmlSerializer).unwrap();
/// assert_eq!(uri, Svg64::Uri("data:image/svg+xml;base64,PHN2Zy8+".to_string()));
/// assert_eq!(svg64(42, &XmlSerializer).unwrap(), Svg64::Unchanged(42));
/// ```
pub fn svg64<T, S>(input: T, serializer: &S) -> Result<Svg64<T>, S::Error>
where
    T: Any,
    S: Serializer,
    S::Node: Any,
{
    svg64_with(input, serializer, &Options::default())
}

pub fn svg64_with<T, S>(input: T, serializer: &S, options: &Options) -> Result<Svg64<T>, S::Error>
where
    T: Any,
    S: Serializer,
    S::Node: Any,
{
    match route(&input, serializer, options) {
        Some(result) => result.map(Svg64::Uri),
        None => {
            trace!("svg64: passing through {}", type_name::<T>());
            Ok(Svg64::Unchanged(input))
        }
    }
}

/// Like [`svg64`], but unrecognized input is an error.
///
/// # Example
///
/// ```
/// use svg64::{svg64_strict, Svg64Error, XmlSerializer};
///
/// let err = svg64_strict(42, &XmlSerializer).unwrap_err();
/// assert!(matches!(err, Svg64Error::UnsupportedInput { type_name: "i32" }));
/// ```
pub fn svg64_strict<T, S>(input: T, serializer: &S) -> Result<String, Svg64Error<S::Error>>
where
    T: Any,
    S: Serializer,
    S::Node: Any,
{
    svg64_strict_with(input, serializer, &Options::default())
}

pub fn svg64_strict_with<T, S>(
    input: T,
    serializer: &S,
    options: &Options,
) -> Result<String, Svg64Error<S::Error>>
where
    T: Any,
    S: Serializer,
    S::Node: Any,
{
    match route(&input, serializer, options) {
        Some(result) => result.map_err(Svg64Error::Serialize),
        None => {
            let type_name = type_name::<T>();
            debug!("svg64: rejecting unsupported input {}", type_name);
            Err(Svg64Error::UnsupportedInput { type_name })
        }
    }
}

fn route<S>(input: &dyn Any, serializer: &S, options: &Options) -> Option<Result<String, S::Error>>
where
    S: Serializer,
    S::Node: Any,
{
    match detect_input_type::<S::Node>(input)? {
        InputType::Markup => {
            let text = markup(input)?;
            trace!("svg64: encoding {} bytes of markup", text.len());
            Some(Ok(get_base64_with(text, options)))
        }
        InputType::Element => {
            let node = input.downcast_ref::<S::Node>()?;
            trace!("svg64: serializing {}", type_name::<S::Node>());
            Some(convert_element_with(node, serializer, options))
        }
    }
}
