//! Decoding of virtual-dom shaped JSON documents.
//!
//! Elements look like `{"tagName": "div", "properties": {..}, "children": [..]}`
//! (with optional `key` and `namespace`), text nodes like `{"text": "hi"}`.
//! Children that are not node-shaped are dropped, since they would render
//! as nothing anyway.

use serde_json::{Map, Value};

use crate::error::{DecodeError, Result};
use crate::node::{VElement, VNode};
use crate::value::{PropValue, Properties, format_number};

impl VNode {
	/// Decodes a node from a JSON value.
	///
	/// # Errors
	///
	/// Returns [`DecodeError::NotANode`] when the value has no node shape,
	/// [`DecodeError::MissingField`] for an element object without `tagName`,
	/// and other variants when a node-shaped value is malformed.
	///
	/// # Example
	///
	/// ```
	/// use serde_json::json;
	/// use vtree_types::VNode;
	///
	/// let node = VNode::from_json(&json!({
	///     "tagName": "p",
	///     "properties": { "className": "lead" },
	///     "children": [{ "text": "hi" }]
	/// })).unwrap();
	/// assert_eq!(node.as_element().map(|el| el.tag_name()), Some("p"));
	/// ```
	pub fn from_json(value: &Value) -> Result<VNode> {
		let Value::Object(object) = value else {
			return Err(DecodeError::NotANode);
		};

		if let Some(tag) = object.get("tagName") {
			let tag = tag.as_str().ok_or(DecodeError::InvalidField {
				field: "tagName",
				expected: "a string",
			})?;
			return decode_element(tag, object).map(VNode::Element);
		}

		match object.get("text") {
			Some(Value::String(text)) => Ok(VNode::text(text.clone())),
			Some(Value::Number(n)) => Ok(VNode::text(format_number(n.as_f64().unwrap_or(f64::NAN)))),
			Some(_) => Err(DecodeError::InvalidField {
				field: "text",
				expected: "a string or number",
			}),
			None if object.contains_key("properties") || object.contains_key("children") => {
				Err(DecodeError::MissingField("tagName"))
			}
			None => Err(DecodeError::NotANode),
		}
	}

	/// Decodes a node from JSON text.
	///
	/// Text that is not valid JSON is reported as [`DecodeError::NotANode`].
	pub fn from_json_str(source: &str) -> Result<VNode> {
		let value: Value = serde_json::from_str(source).map_err(|_| DecodeError::NotANode)?;
		Self::from_json(&value)
	}
}

fn decode_element(tag: &str, object: &Map<String, Value>) -> Result<VElement> {
	let mut el = VElement::new(tag.to_string());

	match object.get("properties") {
		None | Some(Value::Null) => {}
		Some(Value::Object(props)) => el = el.props(decode_properties(props)?),
		Some(_) => {
			return Err(DecodeError::InvalidField {
				field: "properties",
				expected: "an object",
			});
		}
	}

	match object.get("children") {
		None | Some(Value::Null) => {}
		Some(Value::Array(children)) => {
			for child in children {
				match VNode::from_json(child) {
					Ok(node) => el = el.child(node),
					Err(DecodeError::NotANode) => {}
					Err(e) => return Err(e),
				}
			}
		}
		Some(_) => {
			return Err(DecodeError::InvalidField {
				field: "children",
				expected: "an array",
			});
		}
	}

	match object.get("key") {
		None | Some(Value::Null) => {}
		Some(Value::String(key)) => el = el.key(key.clone()),
		Some(Value::Number(key)) => el = el.key(key.to_string()),
		Some(_) => {
			return Err(DecodeError::InvalidField {
				field: "key",
				expected: "a string or number",
			});
		}
	}

	match object.get("namespace") {
		None | Some(Value::Null) => {}
		Some(Value::String(ns)) => el = el.namespace(ns.clone()),
		Some(_) => {
			return Err(DecodeError::InvalidField {
				field: "namespace",
				expected: "a string",
			});
		}
	}

	Ok(el)
}

fn decode_properties(object: &Map<String, Value>) -> Result<Properties> {
	let mut props = Properties::new();
	for (name, value) in object {
		props.insert(name.clone(), decode_value(name, value)?);
	}
	Ok(props)
}

fn decode_value(name: &str, value: &Value) -> Result<PropValue> {
	Ok(match value {
		Value::Null => PropValue::Null,
		Value::Bool(b) => PropValue::Bool(*b),
		Value::Number(n) => PropValue::Number(n.as_f64().unwrap_or(f64::NAN)),
		Value::String(s) => PropValue::from(s.clone()),
		Value::Object(map) => PropValue::Map(decode_properties(map)?),
		Value::Array(_) => return Err(DecodeError::UnsupportedValue(name.to_string())),
	})
}
