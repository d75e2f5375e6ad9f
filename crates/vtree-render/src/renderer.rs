//! Tree-to-string renderer.

use vtree_types::{PropValue, SVG_NAMESPACE, VElement, VNode};

use crate::attributes::{resolve_attribute, resolve_svg_attribute};
use crate::dataset::serialize_dataset;
use crate::error::{RenderError, Result};
use crate::options::RenderOptions;
use crate::raw_attributes::serialize_raw_attributes;
use crate::style::serialize_style;
use crate::util::{escape_html, is_raw_text_element, is_void_element, normalize_tag};

/// Renders virtual trees to HTML strings.
///
/// # Example
///
/// ```
/// use vtree_render::HtmlRenderer;
/// use vtree_types::{VElement, VNode};
///
/// let node: VNode = VElement::new("input").prop("autofocus", true).prop("disabled", false).into();
/// assert_eq!(HtmlRenderer::new().render(&node), "<input autofocus>");
/// assert_eq!(HtmlRenderer::new().render(None), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
	options: RenderOptions,
}

/// What to do when the deferred depth limit is hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
	/// Log and render the offending subtree as nothing.
	Lenient,
	/// Abort with an error.
	Strict,
}

impl HtmlRenderer {
	/// Creates a renderer with default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a renderer with custom options.
	///
	/// A `max_deferred_depth` of zero is raised to one.
	pub fn with_options(mut options: RenderOptions) -> Self {
		if options.max_deferred_depth == 0 {
			tracing::warn!("max_deferred_depth of 0 raised to 1");
			options.max_deferred_depth = 1;
		}
		Self { options }
	}

	/// Returns the renderer options.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders a node (or nothing) to HTML.
	///
	/// Absent input renders as the empty string. Thunks and widgets nested
	/// deeper than the configured limit are logged and skipped.
	pub fn render<'a>(&self, node: impl Into<Option<&'a VNode>>) -> String {
		let mut output = String::new();
		let Some(node) = node.into() else {
			tracing::debug!("render called without a node");
			return output;
		};
		// Lenient mode never reports an error.
		let _ = self.write_node(node, &mut output, 0, Mode::Lenient, false);
		output
	}

	/// Renders a node, failing when deferred nesting exceeds the limit.
	///
	/// # Errors
	///
	/// Returns [`RenderError::DeferredDepthExceeded`] when more than
	/// `max_deferred_depth` thunks/widgets are resolved along one path.
	pub fn try_render<'a>(&self, node: impl Into<Option<&'a VNode>>) -> Result<String> {
		let mut output = String::new();
		if let Some(node) = node.into() {
			self.write_node(node, &mut output, 0, Mode::Strict, false)?;
		}
		Ok(output)
	}

	/// Renders a virtual-dom shaped JSON document.
	///
	/// Values that do not decode to a node render as the empty string.
	#[cfg(feature = "json")]
	pub fn render_json(&self, value: &serde_json::Value) -> String {
		match VNode::from_json(value) {
			Ok(node) => self.render(&node),
			Err(e) => {
				tracing::debug!(error = %e, "JSON value is not a renderable node");
				String::new()
			}
		}
	}

	/// Writes one node. `raw_text` is set while inside a `script` or `style`
	/// element, where text is written unescaped.
	fn write_node(
		&self,
		node: &VNode,
		output: &mut String,
		depth: usize,
		mode: Mode,
		raw_text: bool,
	) -> Result<()> {
		match node {
			VNode::Text(text) if raw_text => {
				output.push_str(text.text());
				Ok(())
			}
			VNode::Text(text) => {
				output.push_str(&escape_html(text.text()));
				Ok(())
			}
			VNode::Element(el) => self.write_element(el, output, depth, mode),
			VNode::Thunk(thunk) => {
				self.write_deferred(|| thunk.render(), "thunk", output, depth, mode, raw_text)
			}
			VNode::Widget(widget) => {
				self.write_deferred(|| widget.render(), widget.name(), output, depth, mode, raw_text)
			}
		}
	}

	/// Resolves a thunk or widget and renders what it produced.
	fn write_deferred(
		&self,
		render: impl FnOnce() -> VNode,
		source: &str,
		output: &mut String,
		depth: usize,
		mode: Mode,
		raw_text: bool,
	) -> Result<()> {
		let limit = self.options.max_deferred_depth;
		if depth >= limit {
			return match mode {
				Mode::Strict => Err(RenderError::DeferredDepthExceeded { limit }),
				Mode::Lenient => {
					tracing::warn!(limit, source, "deferred node nesting limit reached, skipping subtree");
					Ok(())
				}
			};
		}
		let rendered = render();
		self.write_node(&rendered, output, depth + 1, mode, raw_text)
	}

	fn write_element(
		&self,
		el: &VElement,
		output: &mut String,
		depth: usize,
		mode: Mode,
	) -> Result<()> {
		let tag = normalize_tag(el.tag_name());

		output.push('<');
		output.push_str(&tag);
		self.write_attributes(el, output);
		output.push('>');

		if let Some(inner_html) = el.inner_html() {
			// Caller-trusted markup, written as is.
			if let Some(markup) = inner_html.as_text() {
				output.push_str(&markup);
			}
		} else {
			let raw_text = !self.options.escape_raw_text && is_raw_text_element(&tag);
			for child in el.child_nodes() {
				self.write_node(child, output, depth, mode, raw_text)?;
			}
		}

		if !is_void_element(&tag) {
			output.push_str("</");
			output.push_str(&tag);
			output.push('>');
		}
		Ok(())
	}

	fn write_attributes(&self, el: &VElement, output: &mut String) {
		let in_svg = el.namespace_uri() == Some(SVG_NAMESPACE);
		let resolve: fn(&str, &PropValue) -> Option<String> =
			if in_svg { resolve_svg_attribute } else { resolve_attribute };
		for (name, value) in el.properties().iter() {
			if value.is_null() {
				continue;
			}
			match name {
				"style" => {
					let css = match value {
						PropValue::Map(style) => serialize_style(style),
						PropValue::String(css) => css.trim().to_string(),
						_ => String::new(),
					};
					if !css.is_empty() {
						output.push_str(" style=\"");
						output.push_str(&escape_html(&css));
						output.push('"');
					}
				}
				"dataset" => {
					if let PropValue::Map(dataset) = value {
						for fragment in serialize_dataset(dataset) {
							output.push(' ');
							output.push_str(&fragment);
						}
					}
				}
				"attributes" => {
					if let PropValue::Map(attributes) = value {
						for slot in serialize_raw_attributes(attributes) {
							match slot {
								Some(fragment) => {
									output.push(' ');
									output.push_str(&fragment);
								}
								None if self.options.collapse_empty_attribute_slots => {}
								None => output.push(' '),
							}
						}
					}
				}
				"innerHTML" => {}
				_ => {
					if let Some(fragment) = resolve(name, value) {
						output.push(' ');
						output.push_str(&fragment);
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vtree_types::{Hook, Properties, VText, partial};

	fn render(node: impl Into<VNode>) -> String {
		HtmlRenderer::new().render(&node.into())
	}

	#[rstest]
	fn test_render_simple_element() {
		assert_eq!(render(VElement::new("span")), "<span></span>");
	}

	#[rstest]
	fn test_render_text_with_escaping() {
		assert_eq!(render(VText::new("a<b")), "a&lt;b");
	}

	#[rstest]
	fn test_render_nothing() {
		assert_eq!(HtmlRenderer::new().render(None), "");
		assert_eq!(HtmlRenderer::new().try_render(None), Ok(String::new()));
	}

	#[rstest]
	fn test_void_element_never_closes() {
		assert_eq!(render(VElement::new("br").child("ignored?")), "<br>ignored?");
		assert_eq!(render(VElement::new("INPUT")), "<input>");
	}

	#[rstest]
	fn test_render_lowercases_tag() {
		assert_eq!(render(VElement::new("SPAN").child("hello")), "<span>hello</span>");
	}

	#[rstest]
	fn test_render_attributes_in_property_order() {
		let form = VElement::new("form")
			.prop("className", "login")
			.prop("acceptCharset", "ISO-8859-1")
			.prop("accessKey", "h");
		assert_eq!(
			render(form),
			"<form class=\"login\" accept-charset=\"ISO-8859-1\" accesskey=\"h\"></form>"
		);
	}

	#[rstest]
	fn test_render_style_string() {
		let div = VElement::new("div").prop("style", " color: red; ");
		assert_eq!(render(div), "<div style=\"color: red;\"></div>");
	}

	#[rstest]
	fn test_render_empty_style_is_omitted() {
		let div = VElement::new("div").prop("style", Properties::new());
		assert_eq!(render(div), "<div></div>");
	}

	#[rstest]
	fn test_render_style_value_is_escaped() {
		let div = VElement::new("div")
			.prop("style", Properties::new().with("fontFamily", "\"Fira Sans\""));
		assert_eq!(
			render(div),
			"<div style=\"font-family: &quot;Fira Sans&quot;;\"></div>"
		);
	}

	#[rstest]
	fn test_reserved_keys_with_scalar_values_render_nothing() {
		let div = VElement::new("div")
			.prop("dataset", "x")
			.prop("attributes", 1)
			.prop("style", true);
		assert_eq!(render(div), "<div></div>");
	}

	#[rstest]
	fn test_inner_html_number() {
		let div = VElement::new("div").prop("innerHTML", 5);
		assert_eq!(render(div), "<div>5</div>");
	}

	#[rstest]
	fn test_raw_text_does_not_reach_nested_elements() {
		let script = VElement::new("script")
			.child("a < b")
			.child(VElement::new("b").child("<"));
		assert_eq!(render(script), "<script>a < b<b>&lt;</b></script>");
	}

	#[rstest]
	fn test_raw_text_from_deferred_children() {
		let script = VElement::new("script")
			.child(partial(|code: &&'static str| VNode::text(*code), "a < b"))
			.child(VNode::thunk(|| VNode::thunk(|| VNode::text(" && c"))));
		assert_eq!(render(script), "<script>a < b && c</script>");
	}

	#[rstest]
	fn test_deferred_element_inside_script_escapes_its_own_text() {
		let script = VElement::new("script")
			.child(VNode::thunk(|| VElement::new("b").child("<").into()));
		assert_eq!(render(script), "<script><b>&lt;</b></script>");
	}

	#[rstest]
	fn test_escape_raw_text_option() {
		let renderer = HtmlRenderer::with_options(RenderOptions::new().escape_raw_text(true));
		let node: VNode = VElement::new("style").child("a > b").into();
		assert_eq!(renderer.render(&node), "<style>a &gt; b</style>");
	}

	#[rstest]
	fn test_collapse_empty_attribute_slots() {
		let renderer =
			HtmlRenderer::with_options(RenderOptions::new().collapse_empty_attribute_slots(true));
		let node: VNode = VElement::new("circle")
			.prop(
				"attributes",
				Properties::new().with("cx", "60").with("r", PropValue::Null),
			)
			.into();
		assert_eq!(renderer.render(&node), "<circle cx=\"60\"></circle>");
	}

	#[rstest]
	fn test_thunk_returning_thunk() {
		let inner = partial(|text: &&'static str| VNode::text(*text), "deep");
		let outer = VNode::thunk(move || inner.clone());
		assert_eq!(HtmlRenderer::new().render(&outer), "deep");
	}

	#[rstest]
	#[case(1, "")]
	#[case(2, "x")]
	fn test_depth_limit_lenient(#[case] limit: usize, #[case] expected: &str) {
		let inner = VNode::thunk(|| VNode::text("x"));
		let outer = VNode::thunk(move || inner.clone());
		let renderer = HtmlRenderer::with_options(RenderOptions::new().max_deferred_depth(limit));
		assert_eq!(renderer.render(&outer), expected);
	}

	#[rstest]
	fn test_zero_depth_limit_is_raised_to_one() {
		let options = RenderOptions {
			max_deferred_depth: 0,
			..RenderOptions::default()
		};
		let renderer = HtmlRenderer::with_options(options);
		assert_eq!(renderer.options().max_deferred_depth, 1);
		let thunk = VNode::thunk(|| VNode::text("x"));
		assert_eq!(renderer.render(&thunk), "x");
		let renderer = HtmlRenderer::with_options(RenderOptions::new().max_deferred_depth(0));
		assert_eq!(renderer.try_render(&thunk), Ok("x".to_string()));
	}

	#[rstest]
	fn test_unknown_svg_properties_render_verbatim() {
		let path: VNode = VElement::new("path")
			.namespace(SVG_NAMESPACE)
			.prop("d", "M0 0")
			.prop("vectorEffect", "non-scaling-stroke")
			.prop("ev-click", Hook::new(|| {}))
			.into();
		assert_eq!(
			HtmlRenderer::new().render(&path),
			"<path d=\"M0 0\" vectorEffect=\"non-scaling-stroke\"></path>"
		);
	}

	#[rstest]
	fn test_unknown_properties_outside_svg_are_dropped() {
		assert_eq!(render(VElement::new("path").prop("vectorEffect", "x")), "<path></path>");
	}

	#[rstest]
	fn test_depth_limit_strict() {
		let inner = VNode::thunk(|| VNode::text("x"));
		let outer = VNode::thunk(move || inner.clone());
		let renderer = HtmlRenderer::with_options(RenderOptions::new().max_deferred_depth(1));
		assert_eq!(
			renderer.try_render(&outer),
			Err(RenderError::DeferredDepthExceeded { limit: 1 })
		);
	}
}
