//! # vtree-html
//!
//! Server-side rendering of virtual DOM trees to HTML strings.
//!
//! A virtual tree is built from elements, text nodes, thunks and widgets
//! ([`vtree_types`]) and serialized to markup in a single pass
//! ([`vtree_render`]). Unknown properties and null values are dropped, so
//! rendering never fails on unrecognized input.
//!
//! ## Feature Flags
//!
//! - `json` (default) - Decode and render virtual-dom shaped JSON documents
//!
//! ## Quick Example
//!
//! ```
//! use vtree_html::prelude::*;
//!
//! let tree = h(
//!     "div.greeting",
//!     Some(Properties::new().with("style", Properties::new().with("zIndex", 1))),
//!     vec![h("br", None, ()), VNode::text("Hello <world>")],
//! );
//!
//! assert_eq!(
//!     to_html(&tree),
//!     "<div style=\"z-index: 1;\" class=\"greeting\"><br>Hello &lt;world&gt;</div>"
//! );
//! ```

pub use vtree_render as render;
pub use vtree_types as types;

pub use vtree_render::{ConfigError, HtmlRenderer, RenderError, RenderOptions, escape_html};
pub use vtree_types::{
	DecodeError, Hook, PropValue, Properties, Thunk, VElement, VNode, VText, Widget, h, partial,
	svg,
};

/// Renders a node (or nothing) to HTML with default options.
///
/// Equivalent to `HtmlRenderer::new().render(node)`.
pub fn to_html<'a>(node: impl Into<Option<&'a VNode>>) -> String {
	HtmlRenderer::new().render(node)
}

/// Renders a virtual-dom shaped JSON document with default options.
///
/// Values that do not decode to a node render as the empty string.
#[cfg(feature = "json")]
pub fn to_html_json(value: &serde_json::Value) -> String {
	HtmlRenderer::new().render_json(value)
}

/// Commonly used types and functions.
pub mod prelude {
	pub use crate::to_html;
	#[cfg(feature = "json")]
	pub use crate::to_html_json;
	pub use crate::{
		HtmlRenderer, Hook, PropValue, Properties, RenderOptions, Thunk, VElement, VNode, VText,
		Widget, h, partial, svg,
	};
}
