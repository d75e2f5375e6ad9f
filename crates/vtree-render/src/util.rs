//! Utility functions for HTML rendering.
//!
//! This module provides the escaping primitive, the camelCase to kebab-case
//! conversion shared by the style and dataset serializers, and the element
//! classification sets used by the tree renderer.

use std::borrow::Cow;

/// Escapes HTML special characters in a string.
///
/// This function replaces the following characters:
/// - `&` → `&amp;`
/// - `<` → `&lt;`
/// - `>` → `&gt;`
/// - `"` → `&quot;`
/// - `'` → `&#39;`
///
/// Returns a borrowed reference if no escaping is needed,
/// or an owned string if any characters were escaped.
pub fn escape_html(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#39;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Converts a camelCase name to kebab-case (`zIndex` → `z-index`).
///
/// Names without ASCII uppercase letters, including names that are already
/// kebab-case, are returned unchanged. A leading uppercase letter is
/// lowercased without inserting a dash.
pub fn hyphenate(name: &str) -> Cow<'_, str> {
	if !name.bytes().any(|b| b.is_ascii_uppercase()) {
		return Cow::Borrowed(name);
	}
	let mut out = String::with_capacity(name.len() + 4);
	for (i, c) in name.chars().enumerate() {
		if c.is_ascii_uppercase() {
			if i > 0 {
				out.push('-');
			}
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	Cow::Owned(out)
}

/// Elements that never have a closing tag.
pub const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
	"source", "track", "wbr",
];

/// Elements whose text content is emitted verbatim.
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Returns `true` if the (lowercase) tag is a void element.
pub fn is_void_element(tag: &str) -> bool {
	VOID_ELEMENTS.contains(&tag)
}

/// Returns `true` if the (lowercase) tag is a raw text element.
pub fn is_raw_text_element(tag: &str) -> bool {
	RAW_TEXT_ELEMENTS.contains(&tag)
}

/// Lowercases a tag name, borrowing when it is already lowercase.
pub(crate) fn normalize_tag(tag: &str) -> Cow<'_, str> {
	if tag.bytes().any(|b| b.is_ascii_uppercase()) {
		Cow::Owned(tag.to_ascii_lowercase())
	} else {
		Cow::Borrowed(tag)
	}
}
