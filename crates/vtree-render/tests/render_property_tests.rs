//! Rendering property-based tests
//!
//! Property-based tests for child ordering, escaping and void elements.

use proptest::prelude::*;
use vtree_render::{HtmlRenderer, escape_html};
use vtree_types::{Properties, VElement, VNode};

const CONTAINER_TAGS: &[&str] = &["div", "span", "p", "ul", "li", "section"];
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "wbr"];

fn render(node: &VNode) -> String {
	HtmlRenderer::new().render(node)
}

fn unescape(s: &str) -> String {
	s.replace("&lt;", "<")
		.replace("&gt;", ">")
		.replace("&quot;", "\"")
		.replace("&#39;", "'")
		.replace("&amp;", "&")
}

fn arb_text() -> impl Strategy<Value = VNode> {
	".{0,16}".prop_map(|text: String| VNode::text(text))
}

fn arb_tree() -> impl Strategy<Value = VNode> {
	arb_text().prop_recursive(4, 32, 4, |inner| {
		(
			prop::sample::select(CONTAINER_TAGS),
			prop::option::of("[a-z ]{1,8}"),
			prop::collection::vec(inner, 0..4),
		)
			.prop_map(|(tag, class, children)| {
				let mut el = VElement::new(tag).children(children);
				if let Some(class) = class {
					el = el.prop("className", class);
				}
				VNode::from(el)
			})
	})
}

// ============================================================================
// Property-Based Tests: Structure
// ============================================================================

proptest! {
	/// Test: Children render in order between the parent's tags
	///
	/// Category: Property
	/// Verifies render(parent[a, b]) == open + render(a) + render(b) + close.
	#[test]
	fn prop_children_concatenate_in_order(
		tag in prop::sample::select(CONTAINER_TAGS),
		a in arb_tree(),
		b in arb_tree(),
	) {
		let parent: VNode = VElement::new(tag).child(a.clone()).child(b.clone()).into();
		let expected = format!("<{tag}>{}{}</{tag}>", render(&a), render(&b));
		prop_assert_eq!(render(&parent), expected);
	}

	/// Test: Wrapping a child in a thunk does not change the output
	///
	/// Category: Property
	/// Verifies that deferred nodes render exactly like the node they produce.
	#[test]
	fn prop_thunk_is_transparent(tree in arb_tree()) {
		let direct = render(&tree);
		let deferred = VNode::thunk(move || tree.clone());
		prop_assert_eq!(render(&deferred), direct);
	}

	/// Test: Void elements never close
	///
	/// Category: Property
	/// Verifies that void elements render as a single start tag.
	#[test]
	fn prop_void_elements_never_close(
		tag in prop::sample::select(VOID_TAGS),
		id in "[a-z]{1,8}",
	) {
		let node: VNode = VElement::new(tag).prop("id", id.clone()).into();
		prop_assert_eq!(render(&node), format!("<{tag} id=\"{id}\">"));
	}
}

// ============================================================================
// Property-Based Tests: Escaping
// ============================================================================

proptest! {
	/// Test: Text content is escaped and recoverable
	///
	/// Category: Property
	/// Verifies that rendered text has no markup characters and unescapes to the input.
	#[test]
	fn prop_text_is_escaped(text in ".{0,64}") {
		let html = render(&VNode::text(text.clone()));
		prop_assert!(!html.contains(['<', '>', '"', '\'']));
		prop_assert_eq!(unescape(&html), text);
	}

	/// Test: Attribute values cannot break out of their quotes
	///
	/// Category: Property
	/// Verifies that a title value renders escaped inside one quoted attribute.
	#[test]
	fn prop_attribute_value_is_escaped(value in ".{0,32}") {
		let node: VNode = VElement::new("div").prop("title", value.clone()).into();
		let expected = format!("<div title=\"{}\"></div>", escape_html(&value));
		prop_assert_eq!(render(&node), expected);
	}

	/// Test: Raw attribute names and values are escaped
	///
	/// Category: Property
	/// Verifies that the attributes map escapes both sides of every pair.
	#[test]
	fn prop_raw_attributes_are_escaped(name in "[a-z\"<]{1,8}", value in ".{0,16}") {
		let node: VNode = VElement::new("circle")
			.prop("attributes", Properties::new().with(name.clone(), value.clone()))
			.into();
		let expected = format!(
			"<circle {}=\"{}\"></circle>",
			escape_html(&name),
			escape_html(&value)
		);
		prop_assert_eq!(render(&node), expected);
	}
}
