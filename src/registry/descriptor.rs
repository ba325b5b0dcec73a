//! Static operation descriptors and the per-field mapping rules they carry.

// self
use crate::{
	_prelude::*,
	registry::{HttpMethod, Resource},
};

/// How a raw parameter value is coerced and transformed before transmission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
	/// Plain string sent as is.
	Text,
	/// String wrapped into a one-element array.
	TextList,
	/// Boolean.
	Flag,
	/// JSON number.
	Number,
	/// JSON supplied as text and parsed before transmission (metadata, claims).
	Json,
	/// Date-time text converted to Unix epoch milliseconds.
	Timestamp,
}
impl FieldKind {
	/// Describes the accepted input shape for error messages.
	pub const fn expected(self) -> &'static str {
		match self {
			FieldKind::Text | FieldKind::TextList => "a string",
			FieldKind::Flag => "a boolean",
			FieldKind::Number => "a number",
			FieldKind::Json => "a JSON object or JSON text",
			FieldKind::Timestamp => "a date-time string or epoch milliseconds",
		}
	}
}

/// Default applied when the parameter source supplies no value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DefaultValue {
	/// String default.
	Text(&'static str),
	/// Boolean default.
	Flag(bool),
	/// Integer default.
	Number(i64),
}
impl DefaultValue {
	/// Converts the default into the JSON value the resolver works with.
	pub fn to_value(self) -> Value {
		match self {
			DefaultValue::Text(text) => Value::from(text),
			DefaultValue::Flag(flag) => Value::from(flag),
			DefaultValue::Number(number) => Value::from(number),
		}
	}
}

/// Presence rule for a field whose value is absent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Presence {
	/// Omit the field.
	Optional,
	/// Fail with a missing-parameter error.
	Required,
	/// Send the declared default.
	Default(DefaultValue),
	/// Send an empty JSON object; only meaningful for [`FieldKind::Json`].
	Always,
}

/// Mapping from one host parameter to one API key.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldSpec {
	/// Host parameter name read from the parameter source.
	pub param: &'static str,
	/// API key: query key, body key, or path placeholder name.
	pub key: &'static str,
	/// Coercion and transform rule.
	pub kind: FieldKind,
	/// Behavior when the value is absent.
	pub presence: Presence,
	/// Boolean parameter that must resolve to `true` for the field to be sent.
	pub condition: Option<&'static str>,
}
impl FieldSpec {
	/// Creates an optional field.
	pub const fn new(param: &'static str, key: &'static str, kind: FieldKind) -> Self {
		Self { param, key, kind, presence: Presence::Optional, condition: None }
	}

	/// Optional string field.
	pub const fn text(param: &'static str, key: &'static str) -> Self {
		Self::new(param, key, FieldKind::Text)
	}

	/// Optional string field sent as a one-element array.
	pub const fn text_list(param: &'static str, key: &'static str) -> Self {
		Self::new(param, key, FieldKind::TextList)
	}

	/// Optional boolean field.
	pub const fn flag(param: &'static str, key: &'static str) -> Self {
		Self::new(param, key, FieldKind::Flag)
	}

	/// Optional numeric field.
	pub const fn number(param: &'static str, key: &'static str) -> Self {
		Self::new(param, key, FieldKind::Number)
	}

	/// Optional JSON field supplied as text.
	pub const fn json(param: &'static str, key: &'static str) -> Self {
		Self::new(param, key, FieldKind::Json)
	}

	/// Optional date-time field sent as epoch milliseconds.
	pub const fn timestamp(param: &'static str, key: &'static str) -> Self {
		Self::new(param, key, FieldKind::Timestamp)
	}

	/// Required string bound to the path placeholder of the same name.
	pub const fn path(name: &'static str) -> Self {
		Self::text(name, name).required()
	}

	/// Marks the field as required.
	pub const fn required(mut self) -> Self {
		self.presence = Presence::Required;

		self
	}

	/// Uses `value` when the parameter is absent.
	pub const fn or_text(mut self, value: &'static str) -> Self {
		self.presence = Presence::Default(DefaultValue::Text(value));

		self
	}

	/// Uses `value` when the parameter is absent.
	pub const fn or_flag(mut self, value: bool) -> Self {
		self.presence = Presence::Default(DefaultValue::Flag(value));

		self
	}

	/// Uses `value` when the parameter is absent.
	pub const fn or_number(mut self, value: i64) -> Self {
		self.presence = Presence::Default(DefaultValue::Number(value));

		self
	}

	/// Always sends the field, falling back to an empty JSON object.
	pub const fn always(mut self) -> Self {
		self.presence = Presence::Always;

		self
	}

	/// Sends the field only when the boolean parameter `flag` is `true`.
	pub const fn only_if(mut self, flag: &'static str) -> Self {
		self.condition = Some(flag);

		self
	}

	/// Returns true when an absent value can never reach the wire.
	pub const fn is_guaranteed(&self) -> bool {
		matches!(self.presence, Presence::Required | Presence::Default(_))
	}
}

/// Immutable HTTP shape of one (resource, operation) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDescriptor {
	/// Resource the operation belongs to.
	pub resource: Resource,
	/// Host operation identifier (e.g. `getUser`).
	pub operation: &'static str,
	/// HTTP method.
	pub method: HttpMethod,
	/// Path template relative to the base URL, with `{placeholder}` segments.
	pub path: &'static str,
	/// Fields substituted into path placeholders.
	pub path_fields: Vec<FieldSpec>,
	/// Fields encoded into the query string, in order.
	pub query_fields: Vec<FieldSpec>,
	/// Fields assembled into the JSON body, in order.
	pub body_fields: Vec<FieldSpec>,
}
impl OperationDescriptor {
	/// Creates a descriptor without fields.
	pub fn new(
		resource: Resource,
		operation: &'static str,
		method: HttpMethod,
		path: &'static str,
	) -> Self {
		Self {
			resource,
			operation,
			method,
			path,
			path_fields: Vec::new(),
			query_fields: Vec::new(),
			body_fields: Vec::new(),
		}
	}

	/// Appends path fields.
	pub fn path_fields<I>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = FieldSpec>,
	{
		self.path_fields.extend(fields);

		self
	}

	/// Appends query fields.
	pub fn query<I>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = FieldSpec>,
	{
		self.query_fields.extend(fields);

		self
	}

	/// Appends body fields.
	pub fn body<I>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = FieldSpec>,
	{
		self.body_fields.extend(fields);

		self
	}

	/// Returns true when requests for this operation carry a JSON body.
	pub fn has_body(&self) -> bool {
		!self.body_fields.is_empty()
	}

	/// Iterates over the `{placeholder}` names of the path template, in order.
	pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
		let path: &'static str = self.path;

		path.split('/').filter_map(placeholder)
	}
}

/// Extracts the placeholder name of a `{name}` path segment.
pub(crate) fn placeholder(segment: &str) -> Option<&str> {
	segment.strip_prefix('{').and_then(|rest| rest.strip_suffix('}'))
}
