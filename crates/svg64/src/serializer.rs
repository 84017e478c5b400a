//! Graphics-node serialization capability.

/// Turns a graphics-tree node into its markup text.
///
/// Hosts with their own document model implement this for their node
/// handle type. [`XmlSerializer`](crate::XmlSerializer) covers the crate's
/// own [`Element`](crate::Element) tree.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use svg64::{convert_element, Serializer};
///
/// struct Circle(u32);
///
/// struct CircleSerializer;
///
/// impl Serializer for CircleSerializer {
///     type Node = Circle;
///     type Error = Infallible;
///
///     fn serialize(&self, node: &Circle) -> Result<String, Infallible> {
///         Ok(format!("<circle r=\"{}\"/>", node.0))
///     }
/// }
///
/// let uri = convert_element(&Circle(4), &CircleSerializer).unwrap();
/// assert!(uri.starts_with("data:image/svg+xml;base64,"));
/// ```
pub trait Serializer {
    /// The node handle this serializer understands.
    type Node;
    /// Error raised when a node cannot be serialized.
    type Error;

    fn serialize(&self, node: &Self::Node) -> Result<String, Self::Error>;
}
