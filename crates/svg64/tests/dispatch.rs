//! Dispatching markup, host nodes, and unsupported values.

use std::fmt;

use svg64::{
    convert_element, get_base64, parse_data_uri, svg64, svg64_strict, svg64_with, Element,
    Options, Serializer, Svg64, Svg64Error, SvgInput, Utf8Mode, XmlSerializer,
};

/// A host node handle that may have been detached from its document.
#[derive(Debug, PartialEq)]
struct HostNode {
    markup: String,
    attached: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct Detached;

impl fmt::Display for Detached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("node is detached")
    }
}

impl std::error::Error for Detached {}

struct HostSerializer;

impl Serializer for HostSerializer {
    type Node = HostNode;
    type Error = Detached;

    fn serialize(&self, node: &HostNode) -> Result<String, Detached> {
        if node.attached {
            Ok(node.markup.clone())
        } else {
            Err(Detached)
        }
    }
}

fn node(markup: &str, attached: bool) -> HostNode {
    HostNode {
        markup: markup.to_string(),
        attached,
    }
}

#[test]
fn host_node_is_serialized_first() {
    let uri = svg64(node("<svg/>", true), &HostSerializer).unwrap();
    assert_eq!(uri, Svg64::Uri(get_base64("<svg/>")));
}

#[test]
fn convert_element_propagates_failure() {
    assert_eq!(convert_element(&node("<svg/>", false), &HostSerializer), Err(Detached));
}

#[test]
fn strict_mode_keeps_source_error() {
    let err = svg64_strict(node("<svg/>", false), &HostSerializer).unwrap_err();
    assert!(matches!(err, Svg64Error::Serialize(Detached)));
    let source = std::error::Error::source(&err).map(ToString::to_string);
    assert_eq!(source.as_deref(), Some("node is detached"));
}

#[test]
fn nodes_of_another_tree_are_not_recognized() {
    // an Element is not a HostNode
    let out = svg64(Element::new("svg"), &HostSerializer).unwrap();
    assert!(matches!(out, Svg64::Unchanged(ref e) if e.name == "svg"));
}

#[test]
fn pass_through_returns_original_value() {
    assert_eq!(svg64(42, &HostSerializer).unwrap(), Svg64::Unchanged(42));
    assert_eq!(
        svg64(vec![1u8, 2, 3], &XmlSerializer).unwrap(),
        Svg64::Unchanged(vec![1u8, 2, 3])
    );
}

#[test]
fn element_tree_round_trips_through_uri() {
    let svg = Element::new("svg")
        .attr("viewBox", "0 0 10 10")
        .child(Element::new("text").text("x < y"));
    let uri = svg64(svg, &XmlSerializer).unwrap().into_uri().unwrap();
    assert_eq!(
        parse_data_uri(&uri).unwrap(),
        r#"<svg viewBox="0 0 10 10" xmlns="http://www.w3.org/2000/svg"><text>x &lt; y</text></svg>"#
    );
}

#[test]
fn options_reach_the_encoder() {
    let canonical = Options::new().mode(Utf8Mode::Canonical);
    let out = svg64_with("<text>😀</text>", &XmlSerializer, &canonical).unwrap();
    let default = svg64("<text>😀</text>", &XmlSerializer).unwrap();
    assert_ne!(out, default);
}

#[test]
fn typed_input_matches_dynamic_dispatch() {
    let svg = Element::new("svg");
    let typed = SvgInput::Element(&svg).to_data_uri(&XmlSerializer).unwrap();
    let dynamic = svg64(svg.clone(), &XmlSerializer).unwrap();
    assert_eq!(dynamic, Svg64::Uri(typed));
}
