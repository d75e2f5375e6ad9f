//! Virtual tree nodes.
//!
//! A [`VNode`] is exactly one of four things: an element, a text node, a
//! thunk or a widget. Thunks and widgets are deferred: they produce another
//! node when asked to render.
//!
//! ## Example
//!
//! ```
//! use vtree_types::{VElement, VNode, Properties};
//!
//! let node: VNode = VElement::new("div")
//!     .prop("className", "container")
//!     .child("Hello, World!")
//!     .into();
//!
//! assert_eq!(node.as_element().map(|el| el.child_nodes().len()), Some(1));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::value::{PropValue, Properties};

/// Property keys that direct the renderer instead of naming an attribute.
pub const RESERVED_PROPERTIES: &[&str] = &["attributes", "dataset", "innerHTML", "style"];

/// A deferred, argument-cached tree computation.
///
/// Any `Fn() -> VNode` closure is a thunk; see also [`crate::partial`].
pub trait Thunk: 'static {
	/// Produces the node this thunk stands for.
	fn render(&self) -> VNode;
}

impl<F> Thunk for F
where
	F: Fn() -> VNode + 'static,
{
	fn render(&self) -> VNode {
		self()
	}
}

/// A stateful object that knows how to present itself as a node.
pub trait Widget: 'static {
	/// Produces the node representing the widget's current state.
	fn render(&self) -> VNode;

	/// Returns the widget's name for diagnostics.
	fn name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// A node of the virtual tree.
#[derive(Clone)]
pub enum VNode {
	/// An HTML (or SVG) element.
	Element(VElement),
	/// A text node.
	Text(VText),
	/// A lazily rendered subtree.
	Thunk(Arc<dyn Thunk>),
	/// A stateful widget.
	Widget(Arc<dyn Widget>),
}

impl fmt::Debug for VNode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			VNode::Element(el) => f.debug_tuple("Element").field(el).finish(),
			VNode::Text(text) => f.debug_tuple("Text").field(text).finish(),
			VNode::Thunk(_) => f.write_str("Thunk(..)"),
			VNode::Widget(widget) => f.debug_tuple("Widget").field(&widget.name()).finish(),
		}
	}
}

impl VNode {
	/// Creates an element builder.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> VElement {
		VElement::new(tag)
	}

	/// Creates a text node.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		VNode::Text(VText::new(content))
	}

	/// Wraps a thunk.
	pub fn thunk(thunk: impl Thunk) -> Self {
		VNode::Thunk(Arc::new(thunk))
	}

	/// Wraps a widget.
	pub fn widget(widget: impl Widget) -> Self {
		VNode::Widget(Arc::new(widget))
	}

	pub fn as_element(&self) -> Option<&VElement> {
		match self {
			VNode::Element(el) => Some(el),
			_ => None,
		}
	}

	pub fn as_text(&self) -> Option<&VText> {
		match self {
			VNode::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns `true` for thunks and widgets.
	pub fn is_deferred(&self) -> bool {
		matches!(self, VNode::Thunk(_) | VNode::Widget(_))
	}
}

/// A text node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VText {
	text: Cow<'static, str>,
}

impl VText {
	pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
		Self { text: text.into() }
	}

	/// Returns the raw (unescaped) text payload.
	pub fn text(&self) -> &str {
		&self.text
	}
}

/// An element node.
#[derive(Debug, Clone, Default)]
pub struct VElement {
	/// The tag name as given (case is normalized at render time).
	tag: Cow<'static, str>,
	properties: Properties,
	children: Vec<VNode>,
	/// Reconciliation key. Not rendered.
	key: Option<String>,
	/// Element namespace (e.g. SVG). Not rendered.
	namespace: Option<Cow<'static, str>>,
}

impl VElement {
	/// Creates a new element.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		Self {
			tag: tag.into(),
			..Self::default()
		}
	}

	/// Sets a property.
	pub fn prop(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
		self.properties.insert(name, value);
		self
	}

	/// Merges a property mapping into this element's properties.
	pub fn props(mut self, properties: Properties) -> Self {
		if self.properties.is_empty() {
			self.properties = properties;
		} else {
			for (name, value) in properties.iter() {
				self.properties.insert(name.to_string(), value.clone());
			}
		}
		self
	}

	/// Adds a child node.
	pub fn child(mut self, child: impl IntoVNode) -> Self {
		self.children.push(child.into_vnode());
		self
	}

	/// Adds multiple children.
	pub fn children(mut self, children: impl IntoChildren) -> Self {
		self.children.extend(children.into_children());
		self
	}

	/// Sets the reconciliation key.
	pub fn key(mut self, key: impl Into<String>) -> Self {
		self.key = Some(key.into());
		self
	}

	/// Sets the element namespace.
	pub fn namespace(mut self, namespace: impl Into<Cow<'static, str>>) -> Self {
		self.namespace = Some(namespace.into());
		self
	}

	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	pub fn properties(&self) -> &Properties {
		&self.properties
	}

	pub fn child_nodes(&self) -> &[VNode] {
		&self.children
	}

	pub fn key_value(&self) -> Option<&str> {
		self.key.as_deref()
	}

	pub fn namespace_uri(&self) -> Option<&str> {
		self.namespace.as_deref()
	}

	/// Returns the raw `innerHTML` override, if present and non-null.
	pub fn inner_html(&self) -> Option<&PropValue> {
		self.properties.get("innerHTML").filter(|v| !v.is_null())
	}

	/// Mutable access to the property mapping.
	pub fn properties_mut(&mut self) -> &mut Properties {
		&mut self.properties
	}
}

/// Conversion into a single node.
///
/// Strings become text nodes.
pub trait IntoVNode {
	fn into_vnode(self) -> VNode;
}

impl IntoVNode for VNode {
	fn into_vnode(self) -> VNode {
		self
	}
}

impl IntoVNode for VElement {
	fn into_vnode(self) -> VNode {
		VNode::Element(self)
	}
}

impl IntoVNode for VText {
	fn into_vnode(self) -> VNode {
		VNode::Text(self)
	}
}

impl IntoVNode for String {
	fn into_vnode(self) -> VNode {
		VNode::text(self)
	}
}

impl IntoVNode for &String {
	fn into_vnode(self) -> VNode {
		VNode::text(self.clone())
	}
}

impl IntoVNode for &'static str {
	fn into_vnode(self) -> VNode {
		VNode::text(self)
	}
}

impl From<VElement> for VNode {
	fn from(el: VElement) -> Self {
		VNode::Element(el)
	}
}

impl From<VText> for VNode {
	fn from(text: VText) -> Self {
		VNode::Text(text)
	}
}

/// Conversion into a child sequence.
///
/// Single nodes yield one child, `None` and `()` yield none, vectors, arrays
/// and tuples flatten.
pub trait IntoChildren {
	fn into_children(self) -> Vec<VNode>;
}

macro_rules! impl_into_children_for_node {
	($($ty:ty),*) => {
		$(
			impl IntoChildren for $ty {
				fn into_children(self) -> Vec<VNode> {
					vec![self.into_vnode()]
				}
			}
		)*
	};
}

impl_into_children_for_node!(VNode, VElement, VText, String, &String, &'static str);

impl IntoChildren for () {
	fn into_children(self) -> Vec<VNode> {
		Vec::new()
	}
}

impl<T: IntoChildren> IntoChildren for Option<T> {
	fn into_children(self) -> Vec<VNode> {
		self.map(IntoChildren::into_children).unwrap_or_default()
	}
}

impl<T: IntoChildren> IntoChildren for Vec<T> {
	fn into_children(self) -> Vec<VNode> {
		self.into_iter().flat_map(IntoChildren::into_children).collect()
	}
}

impl<T: IntoChildren, const N: usize> IntoChildren for [T; N] {
	fn into_children(self) -> Vec<VNode> {
		self.into_iter().flat_map(IntoChildren::into_children).collect()
	}
}

impl<A: IntoChildren, B: IntoChildren> IntoChildren for (A, B) {
	fn into_children(self) -> Vec<VNode> {
		let mut children = self.0.into_children();
		children.extend(self.1.into_children());
		children
	}
}

impl<A: IntoChildren, B: IntoChildren, C: IntoChildren> IntoChildren for (A, B, C) {
	fn into_children(self) -> Vec<VNode> {
		let mut children = self.0.into_children();
		children.extend(self.1.into_children());
		children.extend(self.2.into_children());
		children
	}
}

impl<A: IntoChildren, B: IntoChildren, C: IntoChildren, D: IntoChildren> IntoChildren
	for (A, B, C, D)
{
	fn into_children(self) -> Vec<VNode> {
		let mut children = self.0.into_children();
		children.extend(self.1.into_children());
		children.extend(self.2.into_children());
		children.extend(self.3.into_children());
		children
	}
}
