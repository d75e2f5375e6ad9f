//! Renderer configuration.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Default bound on nested thunk/widget resolution.
pub const DEFAULT_MAX_DEFERRED_DEPTH: usize = 128;

/// Options for HTML rendering.
///
/// Options can be built in code or loaded from a TOML document:
///
/// ```
/// use vtree_render::RenderOptions;
///
/// let options = RenderOptions::from_toml_str("max_deferred_depth = 16").unwrap();
/// assert_eq!(options.max_deferred_depth, 16);
/// assert!(!options.collapse_empty_attribute_slots);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
	/// Maximum number of thunks/widgets resolved along one path of the tree.
	pub max_deferred_depth: usize,
	/// Whether text inside `script` and `style` is escaped like any other text.
	pub escape_raw_text: bool,
	/// Whether null entries of an `attributes` mapping are dropped together
	/// with their separating space.
	pub collapse_empty_attribute_slots: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			max_deferred_depth: DEFAULT_MAX_DEFERRED_DEPTH,
			escape_raw_text: false,
			collapse_empty_attribute_slots: false,
		}
	}
}

impl RenderOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the deferred nesting limit.
	pub fn max_deferred_depth(mut self, limit: usize) -> Self {
		self.max_deferred_depth = limit;
		self
	}

	/// Escapes `script` and `style` text content.
	pub fn escape_raw_text(mut self, escape: bool) -> Self {
		self.escape_raw_text = escape;
		self
	}

	/// Drops the empty slots left by null raw attributes.
	pub fn collapse_empty_attribute_slots(mut self, collapse: bool) -> Self {
		self.collapse_empty_attribute_slots = collapse;
		self
	}

	/// Parses and validates options from a TOML document.
	///
	/// Missing keys take their default values; unknown keys are rejected.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Parse`] for malformed documents and
	/// [`ConfigError::Invalid`] for values that fail validation.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let options: RenderOptions = toml::from_str(source)?;
		options.validate()?;
		Ok(options)
	}

	/// Checks option values.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Invalid`] when `max_deferred_depth` is zero.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.max_deferred_depth == 0 {
			return Err(ConfigError::Invalid {
				field: "max_deferred_depth",
				reason: "must be at least 1",
			});
		}
		Ok(())
	}
}

impl FromStr for RenderOptions {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_toml_str(s)
	}
}
