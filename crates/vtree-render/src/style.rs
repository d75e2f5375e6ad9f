//! `style` property serialization.

use vtree_types::Properties;

use crate::util::hyphenate;

/// Serializes a style mapping into CSS text.
///
/// Keys are converted from camelCase to kebab-case and every declaration is
/// terminated with `;`. Null (and non-scalar) values are skipped. An empty
/// mapping yields an empty string, which callers treat as "no attribute".
///
/// The result is not escaped; the tree renderer escapes it as an attribute
/// value.
///
/// # Example
///
/// ```
/// use vtree_render::style::serialize_style;
/// use vtree_types::Properties;
///
/// let style = Properties::new().with("background", "black").with("zIndex", "1");
/// assert_eq!(serialize_style(&style), "background: black; z-index: 1;");
/// ```
pub fn serialize_style(style: &Properties) -> String {
	let mut css = String::new();
	for (name, value) in style.iter() {
		let Some(text) = value.as_text() else {
			continue;
		};
		css.push_str(&hyphenate(name));
		css.push_str(": ");
		css.push_str(&text);
		css.push_str("; ");
	}
	css.truncate(css.trim_end().len());
	css
}
