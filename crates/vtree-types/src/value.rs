//! Property values and property mappings.
//!
//! Every element carries a [`Properties`] mapping from property name to
//! [`PropValue`]. Values are loosely typed on purpose: the same mapping holds
//! plain attribute values, booleans, numbers, nested mappings (for `style`,
//! `dataset` and `attributes`) and opaque hook functions.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// An opaque function value stored on an element (e.g. an `ev-click` hook).
///
/// Hooks are carried through the tree for client-side consumers and are never
/// serialized into HTML.
#[derive(Clone)]
pub struct Hook(Arc<dyn Fn() + Send + Sync + 'static>);

impl Hook {
	/// Wraps a function as a hook value.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Invokes the hook.
	pub fn call(&self) {
		(self.0)()
	}
}

impl fmt::Debug for Hook {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Hook(..)")
	}
}

impl PartialEq for Hook {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

/// A single property value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PropValue {
	/// An explicitly absent value. Never rendered.
	#[default]
	Null,
	/// A boolean flag.
	Bool(bool),
	/// A number, rendered in its shortest decimal form.
	Number(f64),
	/// A string.
	String(Cow<'static, str>),
	/// A nested mapping (`style`, `dataset`, `attributes`).
	Map(Properties),
	/// A function value.
	Hook(Hook),
}

impl PropValue {
	/// Returns `true` for [`PropValue::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, PropValue::Null)
	}

	/// Truthiness as a dynamic language would see it.
	///
	/// `Null`, `false`, `0`, `NaN` and the empty string are falsy; everything
	/// else is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			PropValue::Null => false,
			PropValue::Bool(b) => *b,
			PropValue::Number(n) => *n != 0.0 && !n.is_nan(),
			PropValue::String(s) => !s.is_empty(),
			PropValue::Map(_) | PropValue::Hook(_) => true,
		}
	}

	/// Returns the textual form of a scalar value.
	///
	/// Strings borrow, numbers and booleans are formatted. `Null`, maps and
	/// hooks have no textual form.
	pub fn as_text(&self) -> Option<Cow<'_, str>> {
		match self {
			PropValue::String(s) => Some(Cow::Borrowed(s.as_ref())),
			PropValue::Number(n) => Some(Cow::Owned(format_number(*n))),
			PropValue::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
			PropValue::Null | PropValue::Map(_) | PropValue::Hook(_) => None,
		}
	}

	/// Returns the nested mapping, if this value is one.
	pub fn as_map(&self) -> Option<&Properties> {
		match self {
			PropValue::Map(map) => Some(map),
			_ => None,
		}
	}

	/// Returns the string payload, if this value is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			PropValue::String(s) => Some(s.as_ref()),
			_ => None,
		}
	}
}

/// Formats a number the way `String(n)` does in a browser.
///
/// The shortest round-tripping digits are used. Integral values print without
/// a fractional part, `-0` prints as `0`, and non-finite values print as
/// `NaN` / `Infinity` / `-Infinity`. Values of `1e21` and above, or below
/// `1e-6`, switch to exponent notation (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
	if n.is_nan() {
		return "NaN".to_string();
	}
	if n.is_infinite() {
		let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
		return text.to_string();
	}
	if n == 0.0 {
		return "0".to_string();
	}

	// `{:e}` yields the shortest digits as `d.ddde<exp>`.
	let scientific = format!("{:e}", n.abs());
	let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
	let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
	let exponent: i32 = exponent.parse().unwrap_or(0);
	let count = digits.len() as i32;
	// Position of the decimal point relative to the first digit.
	let point = exponent + 1;

	let body = if count <= point && point <= 21 {
		format!("{digits}{}", "0".repeat((point - count) as usize))
	} else if 0 < point && point <= 21 {
		let (int, frac) = digits.split_at(point as usize);
		format!("{int}.{frac}")
	} else if -6 < point && point <= 0 {
		format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
	} else {
		let sign = if exponent < 0 { '-' } else { '+' };
		let (first, rest) = digits.split_at(1);
		if rest.is_empty() {
			format!("{first}e{sign}{}", exponent.unsigned_abs())
		} else {
			format!("{first}.{rest}e{sign}{}", exponent.unsigned_abs())
		}
	};

	if n < 0.0 { format!("-{body}") } else { body }
}

impl From<bool> for PropValue {
	fn from(value: bool) -> Self {
		PropValue::Bool(value)
	}
}

impl From<&'static str> for PropValue {
	fn from(value: &'static str) -> Self {
		PropValue::String(Cow::Borrowed(value))
	}
}

impl From<String> for PropValue {
	fn from(value: String) -> Self {
		PropValue::String(Cow::Owned(value))
	}
}

impl From<Cow<'static, str>> for PropValue {
	fn from(value: Cow<'static, str>) -> Self {
		PropValue::String(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PropValue {
				fn from(value: $ty) -> Self {
					PropValue::Number(value as f64)
				}
			}
		)*
	};
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64);

impl From<Properties> for PropValue {
	fn from(value: Properties) -> Self {
		PropValue::Map(value)
	}
}

impl From<Hook> for PropValue {
	fn from(value: Hook) -> Self {
		PropValue::Hook(value)
	}
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(PropValue::Null, Into::into)
	}
}

/// An insertion-ordered property mapping with unique keys.
///
/// Inserting an existing key replaces its value in place, so iteration order
/// always reflects first insertion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties {
	entries: Vec<(Cow<'static, str>, PropValue)>,
}

impl Properties {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a property (builder style).
	pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<PropValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Inserts a property, returning the previous value for that key.
	pub fn insert(
		&mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<PropValue>,
	) -> Option<PropValue> {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == name) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.entries.push((name, value));
				None
			}
		}
	}

	/// Looks up a property.
	pub fn get(&self, name: &str) -> Option<&PropValue> {
		self.entries
			.iter()
			.find(|(k, _)| k.as_ref() == name)
			.map(|(_, v)| v)
	}

	/// Removes a property, returning its value.
	pub fn remove(&mut self, name: &str) -> Option<PropValue> {
		let index = self.entries.iter().position(|(k, _)| k.as_ref() == name)?;
		Some(self.entries.remove(index).1)
	}

	/// Returns `true` if the key is present (even with a `Null` value).
	pub fn contains_key(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// Iterates over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
		self.entries.iter().map(|(k, v)| (k.as_ref(), v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for Properties
where
	K: Into<Cow<'static, str>>,
	V: Into<PropValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut props = Properties::new();
		for (k, v) in iter {
			props.insert(k, v);
		}
		props
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Properties
where
	K: Into<Cow<'static, str>>,
	V: Into<PropValue>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}
