//! Error types for vtree-render

use thiserror::Error;

/// Errors reported by [`crate::HtmlRenderer::try_render`].
///
/// The lenient [`crate::HtmlRenderer::render`] never fails; it logs and
/// degrades instead.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
	/// Thunks and widgets kept producing deferred nodes past the configured limit.
	#[error("Deferred node nesting exceeded the limit of {limit}")]
	DeferredDepthExceeded { limit: usize },
}

/// Errors raised while loading [`crate::RenderOptions`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
	/// The document is not valid TOML or does not match the options schema.
	#[error("Failed to parse render options: {0}")]
	Parse(#[from] toml::de::Error),

	/// A field has an unusable value.
	#[error("Invalid render option `{field}`: {reason}")]
	Invalid {
		field: &'static str,
		reason: &'static str,
	},
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
