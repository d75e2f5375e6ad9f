//! Hyperscript-style node builders.
//!
//! `h("div#main.card.wide", props, children)` builds an element from a CSS-like
//! selector. The tag defaults to `div` when the selector starts with `#` or
//! `.`, selector classes are placed before any `className` property, and the
//! selector id is used only when the properties do not already set `id`.

use crate::node::{IntoChildren, VElement, VNode};
use crate::value::{PropValue, Properties};

/// Namespace URI assigned by [`svg`].
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, PartialEq, Eq)]
struct Selector<'a> {
	tag: &'a str,
	id: Option<&'a str>,
	classes: Vec<&'a str>,
}

fn parse_selector(selector: &str) -> Selector<'_> {
	let mut tag = "";
	let mut id = None;
	let mut classes = Vec::new();

	let mut start = 0;
	let mut marker: Option<char> = None;
	let bytes = selector.char_indices().chain(std::iter::once((selector.len(), '\0')));
	for (index, ch) in bytes {
		if ch != '.' && ch != '#' && index != selector.len() {
			continue;
		}
		let part = &selector[start..index];
		match marker {
			None => tag = part,
			Some('#') if !part.is_empty() => id = Some(part),
			Some('.') if !part.is_empty() => classes.push(part),
			_ => {}
		}
		marker = Some(ch);
		start = index + ch.len_utf8();
	}

	if tag.is_empty() {
		tag = "div";
	}
	Selector { tag, id, classes }
}

/// Builds an element node from a selector, optional properties and children.
///
/// # Example
///
/// ```
/// use vtree_types::{h, Properties};
///
/// let node = h("a#home.nav", Some(Properties::new().with("href", "/")), "Home");
/// let el = node.as_element().unwrap();
/// assert_eq!(el.tag_name(), "a");
/// assert_eq!(el.properties().get("id").and_then(|v| v.as_str()), Some("home"));
/// assert_eq!(el.properties().get("className").and_then(|v| v.as_str()), Some("nav"));
/// ```
pub fn h(selector: &str, props: Option<Properties>, children: impl IntoChildren) -> VNode {
	build(selector, props, children).into()
}

/// Like [`h`], in the SVG namespace.
pub fn svg(selector: &str, props: Option<Properties>, children: impl IntoChildren) -> VNode {
	build(selector, props, children)
		.namespace(SVG_NAMESPACE)
		.into()
}

fn build(selector: &str, props: Option<Properties>, children: impl IntoChildren) -> VElement {
	let Selector { tag, id, classes } = parse_selector(selector);
	let mut props = props.unwrap_or_default();

	let key = props.remove("key").and_then(|key| key.as_text().map(|k| k.into_owned()));

	if let Some(id) = id
		&& props.get("id").is_none_or(|v| !v.is_truthy())
	{
		props.insert("id", id.to_string());
	}

	if !classes.is_empty() {
		let mut class_names: Vec<String> = classes.iter().map(|c| c.to_string()).collect();
		if let Some(existing) = props.get("className").filter(|v| v.is_truthy())
			&& let Some(text) = existing.as_text()
		{
			class_names.push(text.into_owned());
		}
		props.insert("className", PropValue::from(class_names.join(" ")));
	}

	let mut el = VElement::new(tag.to_string()).props(props).children(children);
	if let Some(key) = key {
		el = el.key(key);
	}
	el
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::node::VText;
	use rstest::rstest;

	#[rstest]
	#[case("span", "span", None, vec![])]
	#[case("div#main", "div", Some("main"), vec![])]
	#[case(".card", "div", None, vec!["card"])]
	#[case("#app", "div", Some("app"), vec![])]
	#[case("li.item.active", "li", None, vec!["item", "active"])]
	#[case("a#home.nav.top", "a", Some("home"), vec!["nav", "top"])]
	#[case("svg:use", "svg:use", None, vec![])]
	fn test_parse_selector(
		#[case] input: &str,
		#[case] tag: &str,
		#[case] id: Option<&str>,
		#[case] classes: Vec<&str>,
	) {
		assert_eq!(parse_selector(input), Selector { tag, id, classes });
	}

	#[rstest]
	fn test_h_text_child() {
		let node = h("span", None, "test");
		let el = node.as_element().unwrap();
		assert_eq!(el.tag_name(), "span");
		assert_eq!(el.child_nodes()[0].as_text().map(VText::text), Some("test"));
	}

	#[rstest]
	fn test_h_merges_class_names() {
		let node = h(
			"div.a.b",
			Some(Properties::new().with("className", "c")),
			(),
		);
		let el = node.as_element().unwrap();
		assert_eq!(
			el.properties().get("className").and_then(PropValue::as_str),
			Some("a b c")
		);
	}

	#[rstest]
	fn test_h_keeps_explicit_id() {
		let node = h("div#fromSelector", Some(Properties::new().with("id", "explicit")), ());
		let el = node.as_element().unwrap();
		assert_eq!(el.properties().get("id").and_then(PropValue::as_str), Some("explicit"));
	}

	#[rstest]
	fn test_h_moves_key_out_of_properties() {
		let node = h("li", Some(Properties::new().with("key", 3)), "x");
		let el = node.as_element().unwrap();
		assert_eq!(el.key_value(), Some("3"));
		assert!(!el.properties().contains_key("key"));
	}

	#[rstest]
	fn test_svg_sets_namespace() {
		let node = svg("circle", None, ());
		let el = node.as_element().unwrap();
		assert_eq!(el.namespace_uri(), Some(SVG_NAMESPACE));
	}
}
