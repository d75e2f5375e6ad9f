//! `dataset` property serialization.

use vtree_types::Properties;

use crate::util::{escape_html, hyphenate};

/// Serializes a dataset mapping into `data-*` attribute fragments.
///
/// # Example
///
/// ```
/// use vtree_render::dataset::serialize_dataset;
/// use vtree_types::Properties;
///
/// let dataset = Properties::new().with("fooBar", "baz").with("num", 42);
/// assert_eq!(serialize_dataset(&dataset), vec!["data-foo-bar=\"baz\"", "data-num=\"42\""]);
/// ```
pub fn serialize_dataset(dataset: &Properties) -> Vec<String> {
	dataset
		.iter()
		.filter_map(|(name, value)| {
			let text = value.as_text()?;
			Some(format!("data-{}=\"{}\"", hyphenate(name), escape_html(&text)))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vtree_types::PropValue;

	#[rstest]
	fn test_empty_dataset() {
		assert!(serialize_dataset(&Properties::new()).is_empty());
	}

	#[rstest]
	fn test_values_are_escaped() {
		let dataset = Properties::new().with("payload", "{\"a\":1}");
		assert_eq!(
			serialize_dataset(&dataset),
			vec!["data-payload=\"{&quot;a&quot;:1}\""]
		);
	}

	#[rstest]
	fn test_null_entries_are_skipped() {
		let dataset = Properties::new()
			.with("first", PropValue::Null)
			.with("second", true);
		assert_eq!(serialize_dataset(&dataset), vec!["data-second=\"true\""]);
	}
}
