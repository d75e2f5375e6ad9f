//! Property to attribute resolution.
//!
//! Every ordinary element property is looked up in a static table that maps a
//! property name to its [`AttributeInfo`]: the kind of attribute it is and the
//! attribute name it renders under. Lookups accept both the DOM property
//! spelling (`className`, `readOnly`, `strokeWidth`) and the attribute
//! spelling (`class`, `readonly`, `stroke-width`).
//!
//! `data-*` and `aria-*` names bypass the table and always render. On SVG
//! elements, unknown scalar properties render verbatim (see
//! [`resolve_svg_attribute`]). Everything else (event hooks, arbitrary keys)
//! is dropped.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use vtree_types::PropValue;

use crate::util::escape_html;

/// How an attribute treats its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
	/// Presence matters, the value does not (`disabled`, `checked`).
	Boolean,
	/// Boolean for `true`/`false`, valued otherwise (`download`).
	OverloadedBoolean,
	/// Always rendered as `name="value"`.
	Value,
}

/// Classification of a known property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeInfo {
	pub kind: AttributeKind,
	/// The attribute name written into the markup.
	pub attribute_name: String,
}

use AttributeKind::{Boolean, OverloadedBoolean, Value};

/// Known properties: `(property name, kind, attribute name)`.
///
/// `None` as attribute name means the lowercased property name.
pub const KNOWN_PROPERTIES: &[(&str, AttributeKind, Option<&str>)] = &[
	// HTML
	("accept", Value, None),
	("acceptCharset", Value, Some("accept-charset")),
	("accessKey", Value, None),
	("action", Value, None),
	("allowFullScreen", Boolean, None),
	("allowTransparency", Value, None),
	("alt", Value, None),
	("async", Boolean, None),
	("autoCapitalize", Value, None),
	("autoComplete", Value, None),
	("autoCorrect", Value, None),
	("autoFocus", Boolean, None),
	("autoPlay", Boolean, None),
	("autoSave", Value, None),
	("capture", OverloadedBoolean, None),
	("cellPadding", Value, None),
	("cellSpacing", Value, None),
	("challenge", Value, None),
	("charSet", Value, None),
	("checked", Boolean, None),
	("cite", Value, None),
	("classID", Value, None),
	("className", Value, Some("class")),
	("cols", Value, None),
	("colSpan", Value, None),
	("content", Value, None),
	("contentEditable", Value, None),
	("contextMenu", Value, None),
	("controls", Boolean, None),
	("coords", Value, None),
	("crossOrigin", Value, None),
	("data", Value, None),
	("dateTime", Value, None),
	("decoding", Value, None),
	("default", Boolean, None),
	("defer", Boolean, None),
	("dir", Value, None),
	("disabled", Boolean, None),
	("download", OverloadedBoolean, None),
	("draggable", OverloadedBoolean, None),
	("encType", Value, None),
	("enterKeyHint", Value, None),
	("form", Value, None),
	("formAction", Value, None),
	("formEncType", Value, None),
	("formMethod", Value, None),
	("formNoValidate", Boolean, None),
	("formTarget", Value, None),
	("frameBorder", Value, None),
	("headers", Value, None),
	("height", Value, None),
	("hidden", Boolean, None),
	("high", Value, None),
	("href", Value, None),
	("hrefLang", Value, None),
	("htmlFor", Value, Some("for")),
	("httpEquiv", Value, Some("http-equiv")),
	("icon", Value, None),
	("id", Value, None),
	("inert", Boolean, None),
	("inputMode", Value, None),
	("integrity", Value, None),
	("isMap", Boolean, None),
	("itemID", Value, None),
	("itemProp", Value, None),
	("itemRef", Value, None),
	("itemScope", Boolean, None),
	("itemType", Value, None),
	("keyParams", Value, None),
	("keyType", Value, None),
	("kind", Value, None),
	("label", Value, None),
	("lang", Value, None),
	("list", Value, None),
	("loading", Value, None),
	("loop", Boolean, None),
	("low", Value, None),
	("manifest", Value, None),
	("marginHeight", Value, None),
	("marginWidth", Value, None),
	("max", Value, None),
	("maxLength", Value, None),
	("media", Value, None),
	("mediaGroup", Value, None),
	("method", Value, None),
	("min", Value, None),
	("minLength", Value, None),
	("multiple", Boolean, None),
	("muted", Boolean, None),
	("name", Value, None),
	("noModule", Boolean, None),
	("nonce", Value, None),
	("noValidate", Boolean, None),
	("open", Boolean, None),
	("optimum", Value, None),
	("pattern", Value, None),
	("placeholder", Value, None),
	("playsInline", Boolean, None),
	("poster", Value, None),
	("preload", Value, None),
	("property", Value, None),
	("radioGroup", Value, None),
	("readOnly", Boolean, None),
	("referrerPolicy", Value, None),
	("rel", Value, None),
	("required", Boolean, None),
	("results", Value, None),
	("reversed", Boolean, None),
	("role", Value, None),
	("rows", Value, None),
	("rowSpan", Value, None),
	("sandbox", Value, None),
	("scope", Value, None),
	("scoped", Boolean, None),
	("scrolling", Value, None),
	("seamless", Boolean, None),
	("selected", Boolean, None),
	("shape", Value, None),
	("size", Value, None),
	("sizes", Value, None),
	("slot", Value, None),
	("span", Value, None),
	("spellCheck", OverloadedBoolean, None),
	("src", Value, None),
	("srcDoc", Value, None),
	("srcLang", Value, None),
	("srcSet", Value, None),
	("start", Value, None),
	("step", Value, None),
	("summary", Value, None),
	("tabIndex", Value, None),
	("target", Value, None),
	("title", Value, None),
	("translate", Value, None),
	("type", Value, None),
	("unselectable", Value, None),
	("useMap", Value, None),
	("value", Value, None),
	("width", Value, None),
	("wmode", Value, None),
	("wrap", Value, None),
	// SVG
	("clipPath", Value, Some("clip-path")),
	("clipRule", Value, Some("clip-rule")),
	("cx", Value, None),
	("cy", Value, None),
	("d", Value, None),
	("dx", Value, None),
	("dy", Value, None),
	("fill", Value, None),
	("filter", Value, None),
	("fillOpacity", Value, Some("fill-opacity")),
	("fillRule", Value, Some("fill-rule")),
	("fontFamily", Value, Some("font-family")),
	("fontSize", Value, Some("font-size")),
	("fontWeight", Value, Some("font-weight")),
	("fx", Value, None),
	("fy", Value, None),
	("gradientTransform", Value, Some("gradientTransform")),
	("gradientUnits", Value, Some("gradientUnits")),
	("markerEnd", Value, Some("marker-end")),
	("markerMid", Value, Some("marker-mid")),
	("markerStart", Value, Some("marker-start")),
	("mask", Value, None),
	("offset", Value, None),
	("opacity", Value, None),
	("patternContentUnits", Value, Some("patternContentUnits")),
	("patternUnits", Value, Some("patternUnits")),
	("points", Value, None),
	("preserveAspectRatio", Value, Some("preserveAspectRatio")),
	("r", Value, None),
	("rx", Value, None),
	("ry", Value, None),
	("spreadMethod", Value, Some("spreadMethod")),
	("stdDeviation", Value, Some("stdDeviation")),
	("stopColor", Value, Some("stop-color")),
	("stopOpacity", Value, Some("stop-opacity")),
	("stroke", Value, None),
	("strokeDasharray", Value, Some("stroke-dasharray")),
	("strokeDashoffset", Value, Some("stroke-dashoffset")),
	("strokeLinecap", Value, Some("stroke-linecap")),
	("strokeLinejoin", Value, Some("stroke-linejoin")),
	("strokeMiterlimit", Value, Some("stroke-miterlimit")),
	("strokeOpacity", Value, Some("stroke-opacity")),
	("strokeWidth", Value, Some("stroke-width")),
	("textAnchor", Value, Some("text-anchor")),
	("transform", Value, None),
	("version", Value, None),
	("viewBox", Value, Some("viewBox")),
	("x", Value, None),
	("x1", Value, None),
	("x2", Value, None),
	("xlinkActuate", Value, Some("xlink:actuate")),
	("xlinkArcrole", Value, Some("xlink:arcrole")),
	("xlinkHref", Value, Some("xlink:href")),
	("xlinkRole", Value, Some("xlink:role")),
	("xlinkShow", Value, Some("xlink:show")),
	("xlinkTitle", Value, Some("xlink:title")),
	("xlinkType", Value, Some("xlink:type")),
	("xmlBase", Value, Some("xml:base")),
	("xmlLang", Value, Some("xml:lang")),
	("xmlSpace", Value, Some("xml:space")),
	("xmlns", Value, None),
	("xmlnsXlink", Value, Some("xmlns:xlink")),
	("y", Value, None),
	("y1", Value, None),
	("y2", Value, None),
];

static ATTRIBUTE_TABLE: Lazy<HashMap<String, AttributeInfo>> = Lazy::new(|| {
	let mut table = HashMap::with_capacity(KNOWN_PROPERTIES.len() * 2);
	for &(property, kind, attribute) in KNOWN_PROPERTIES {
		let attribute_name = attribute.map_or_else(|| property.to_ascii_lowercase(), str::to_string);
		table.insert(property.to_string(), AttributeInfo { kind, attribute_name });
	}
	// Attribute spellings resolve to the same entry unless they collide with
	// a property name.
	for &(property, _, _) in KNOWN_PROPERTIES {
		let info = table[property].clone();
		if !table.contains_key(&info.attribute_name) {
			table.insert(info.attribute_name.clone(), info);
		}
	}
	table
});

/// Looks up a property name in the attribute table.
pub fn lookup(name: &str) -> Option<&'static AttributeInfo> {
	ATTRIBUTE_TABLE.get(name)
}

/// Returns `true` for names that always render (`data-*`, `aria-*`).
pub fn is_custom_attribute(name: &str) -> bool {
	["data-", "aria-"]
		.iter()
		.any(|prefix| name.len() > prefix.len() && name.starts_with(prefix))
}

/// Resolves one property into a rendered attribute fragment.
///
/// Returns `None` when the property must not appear in the markup: null
/// values, hooks, unknown names, and boolean attributes that are off.
///
/// # Example
///
/// ```
/// use vtree_render::attributes::resolve_attribute;
/// use vtree_types::PropValue;
///
/// assert_eq!(resolve_attribute("className", &"a".into()).as_deref(), Some("class=\"a\""));
/// assert_eq!(resolve_attribute("autofocus", &true.into()).as_deref(), Some("autofocus"));
/// assert_eq!(resolve_attribute("disabled", &false.into()), None);
/// assert_eq!(resolve_attribute("ev-click", &"x".into()), None);
/// ```
pub fn resolve_attribute(name: &str, value: &PropValue) -> Option<String> {
	if matches!(value, PropValue::Null | PropValue::Hook(_)) {
		tracing::trace!(property = name, "dropping null or hook property");
		return None;
	}

	if is_custom_attribute(name) {
		return valued(name, value);
	}

	let Some(info) = lookup(name) else {
		tracing::trace!(property = name, "dropping non-standard property");
		return None;
	};

	match info.kind {
		AttributeKind::Boolean => value.is_truthy().then(|| info.attribute_name.clone()),
		AttributeKind::OverloadedBoolean => match value {
			PropValue::Bool(true) => Some(info.attribute_name.clone()),
			PropValue::Bool(false) => None,
			_ => valued(&info.attribute_name, value),
		},
		AttributeKind::Value => valued(&info.attribute_name, value),
	}
}

/// Resolves one property of an element in the SVG namespace.
///
/// Known properties resolve as in [`resolve_attribute`]. Any other scalar
/// property is an SVG attribute the table does not list (`stdDeviation`,
/// `stroke-miterlimit`, ...) and renders under its own name, escaped.
///
/// ```
/// use vtree_render::attributes::resolve_svg_attribute;
///
/// assert_eq!(
///     resolve_svg_attribute("kernelMatrix", &"1 0 0".into()).as_deref(),
///     Some("kernelMatrix=\"1 0 0\"")
/// );
/// assert_eq!(resolve_svg_attribute("strokeWidth", &2.into()).as_deref(), Some("stroke-width=\"2\""));
/// ```
pub fn resolve_svg_attribute(name: &str, value: &PropValue) -> Option<String> {
	if lookup(name).is_some() || is_custom_attribute(name) {
		return resolve_attribute(name, value);
	}
	let text = value.as_text()?;
	Some(format!("{}=\"{}\"", escape_html(name), escape_html(&text)))
}

/// Formats `name="escaped value"`; `None` for values without a text form.
fn valued(name: &str, value: &PropValue) -> Option<String> {
	let text = value.as_text()?;
	Some(format!("{}=\"{}\"", name, escape_html(&text)))
}
