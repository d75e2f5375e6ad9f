//! # vtree-render
//!
//! Server-side rendering of virtual trees into HTML strings.
//!
//! ## Overview
//!
//! [`HtmlRenderer`] walks a [`VNode`](vtree_types::VNode) tree once and writes
//! markup as it goes. For every element it:
//!
//! - lowercases the tag name
//! - turns each property into an attribute through the static table in
//!   [`attributes`], expanding `style`, `dataset` and `attributes` through
//!   their own serializers
//! - writes `innerHTML` verbatim, or else renders the children in order
//! - omits the closing tag of void elements
//!
//! Thunks and widgets are rendered when visited. Unknown properties and null
//! values are dropped without error.
//!
//! ## Example
//!
//! ```
//! use vtree_render::HtmlRenderer;
//! use vtree_types::{Properties, VElement, VNode};
//!
//! let node: VNode = VElement::new("a")
//!     .prop("href", "/images/xxx.jpg")
//!     .prop("download", "sfw")
//!     .prop("dataset", Properties::new().with("fooBar", "baz"))
//!     .into();
//!
//! assert_eq!(
//!     HtmlRenderer::new().render(&node),
//!     "<a href=\"/images/xxx.jpg\" download=\"sfw\" data-foo-bar=\"baz\"></a>"
//! );
//! ```

pub mod attributes;
pub mod dataset;
pub mod error;
pub mod options;
pub mod raw_attributes;
pub mod renderer;
pub mod style;
pub mod util;

pub use attributes::{AttributeInfo, AttributeKind, lookup, resolve_attribute};
pub use dataset::serialize_dataset;
pub use error::{ConfigError, RenderError};
pub use options::{DEFAULT_MAX_DEFERRED_DEPTH, RenderOptions};
pub use raw_attributes::serialize_raw_attributes;
pub use renderer::HtmlRenderer;
pub use style::serialize_style;
pub use util::{escape_html, is_void_element};
