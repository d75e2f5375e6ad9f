//! Argument-caching thunks.

use crate::node::{Thunk, VNode};

/// A thunk that holds its arguments and a render function.
///
/// The arguments are captured when the thunk is built and passed by
/// reference each time the thunk renders.
pub struct Partial<A, F> {
	args: A,
	render_fn: F,
}

impl<A, F> Partial<A, F>
where
	F: Fn(&A) -> VNode,
{
	pub fn new(render_fn: F, args: A) -> Self {
		Self { args, render_fn }
	}

	/// Returns the cached arguments.
	pub fn args(&self) -> &A {
		&self.args
	}
}

impl<A, F> Thunk for Partial<A, F>
where
	A: 'static,
	F: Fn(&A) -> VNode + 'static,
{
	fn render(&self) -> VNode {
		(self.render_fn)(&self.args)
	}
}

/// Builds a thunk node from a render function and its cached arguments.
///
/// # Example
///
/// ```
/// use vtree_types::{partial, VElement, VNode};
///
/// let node = partial(|text: &String| VElement::new("span").child(text).into(), "hello".to_string());
/// assert!(node.is_deferred());
/// ```
pub fn partial<A, F>(render_fn: F, args: A) -> VNode
where
	A: 'static,
	F: Fn(&A) -> VNode + 'static,
{
	VNode::thunk(Partial::new(render_fn, args))
}
