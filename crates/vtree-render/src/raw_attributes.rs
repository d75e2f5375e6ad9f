//! Verbatim `attributes` property serialization.

use vtree_types::Properties;

use crate::util::escape_html;

/// Serializes an explicit attribute mapping.
///
/// Names are kept as given (namespaces, casing) apart from entity escaping.
/// Each entry yields one slot; entries without a scalar value yield `None`,
/// which the tree renderer still separates with a space unless configured to
/// collapse empty slots.
///
/// # Example
///
/// ```
/// use vtree_render::raw_attributes::serialize_raw_attributes;
/// use vtree_types::{PropValue, Properties};
///
/// let attrs = Properties::new().with("xlink:href", "/a.jpg").with("r", PropValue::Null);
/// assert_eq!(
///     serialize_raw_attributes(&attrs),
///     vec![Some("xlink:href=\"/a.jpg\"".to_string()), None]
/// );
/// ```
pub fn serialize_raw_attributes(attributes: &Properties) -> Vec<Option<String>> {
	attributes
		.iter()
		.map(|(name, value)| {
			let text = value.as_text()?;
			Some(format!("{}=\"{}\"", escape_html(name), escape_html(&text)))
		})
		.collect()
}
