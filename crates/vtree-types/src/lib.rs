//! # vtree-types
//!
//! The virtual tree node model consumed by `vtree-render`.
//!
//! A tree is built from four node kinds:
//!
//! - [`VElement`]: a tag name, an insertion-ordered [`Properties`] mapping and
//!   an ordered child sequence
//! - [`VText`]: a text payload
//! - [`Thunk`]: a deferred computation producing a node (see [`partial`])
//! - [`Widget`]: a stateful object producing a node
//!
//! Trees are usually assembled with the builder methods on [`VElement`] or the
//! hyperscript helpers [`h`] and [`svg`]. With the `json` feature, trees can
//! also be decoded from virtual-dom shaped JSON via [`VNode::from_json`].
//!
//! ## Example
//!
//! ```
//! use vtree_types::{h, Properties};
//!
//! let tree = h(
//!     "ul.menu",
//!     None,
//!     vec![
//!         h("li", Some(Properties::new().with("key", "a")), "First"),
//!         h("li", Some(Properties::new().with("key", "b")), "Second"),
//!     ],
//! );
//! assert_eq!(tree.as_element().map(|el| el.child_nodes().len()), Some(2));
//! ```

pub mod error;
pub mod hyperscript;
#[cfg(feature = "json")]
mod json;
pub mod node;
pub mod thunk;
pub mod value;

pub use error::DecodeError;
pub use hyperscript::{SVG_NAMESPACE, h, svg};
pub use node::{IntoChildren, IntoVNode, RESERVED_PROPERTIES, Thunk, VElement, VNode, VText, Widget};
pub use thunk::{Partial, partial};
pub use value::{Hook, PropValue, Properties, format_number};
