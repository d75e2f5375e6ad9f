//! Error types for vtree-types

use thiserror::Error;

/// Errors raised while decoding a node from a JSON document.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
	/// The value has neither an element nor a text node shape.
	#[error("Value is not a virtual node")]
	NotANode,

	/// A required field is missing.
	#[error("Missing required field: {0}")]
	MissingField(&'static str),

	/// A field is present but has the wrong JSON type.
	#[error("Field `{field}` must be {expected}")]
	InvalidField {
		field: &'static str,
		expected: &'static str,
	},

	/// A property value cannot be represented.
	#[error("Unsupported value for property `{0}`")]
	UnsupportedValue(String),
}

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, DecodeError>;
