// crates.io
use time::{
	Date, OffsetDateTime, PrimitiveDateTime,
	format_description::well_known::{Iso8601, Rfc3339},
};
// self
use crate::{
	_prelude::*,
	error::ParameterError,
	params::ParameterSource,
	registry::{FieldKind, FieldSpec, OperationDescriptor, Presence},
};

/// Path, query, and body pieces resolved for one item.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedParameters {
	/// Placeholder substitutions, in declaration order.
	pub path: Vec<(&'static str, String)>,
	/// Query pairs, in declaration order.
	pub query: Vec<(&'static str, String)>,
	/// JSON body; present iff the descriptor declares body fields.
	pub body: Option<Map<String, Value>>,
}
impl ResolvedParameters {
	/// Returns the substitution for a path placeholder.
	pub fn path_value(&self, placeholder: &str) -> Option<&str> {
		self.path.iter().find(|(key, _)| *key == placeholder).map(|(_, value)| value.as_str())
	}
}

/// Resolves every declared field of `descriptor` for `item_index`.
///
/// Resolution only reads from `source`, so repeating it yields identical output.
pub fn resolve<S>(
	descriptor: &OperationDescriptor,
	item_index: usize,
	source: &S,
) -> Result<ResolvedParameters, ParameterError>
where
	S: ?Sized + ParameterSource,
{
	let reader = FieldReader { item_index, source };
	let mut resolved = ResolvedParameters::default();

	for field in &descriptor.path_fields {
		if let Some(value) = reader.read(field)? {
			let segment = query_text(&value);

			// Dot segments would be normalized away and retarget the request.
			if matches!(segment.as_str(), "." | "..") {
				return Err(ParameterError::InvalidType {
					field: field.param,
					expected: "a path identifier",
				});
			}

			resolved.path.push((field.key, segment));
		}
	}
	for field in &descriptor.query_fields {
		if let Some(value) = reader.read(field)? {
			resolved.query.push((field.key, query_text(&value)));
		}
	}

	if descriptor.has_body() {
		let mut body = Map::new();

		for field in &descriptor.body_fields {
			if let Some(value) = reader.read(field)? {
				body.insert(field.key.to_owned(), value);
			}
		}

		resolved.body = Some(body);
	}

	Ok(resolved)
}

struct FieldReader<'a, S>
where
	S: ?Sized,
{
	item_index: usize,
	source: &'a S,
}
impl<S> FieldReader<'_, S>
where
	S: ?Sized + ParameterSource,
{
	fn read(&self, field: &FieldSpec) -> Result<Option<Value>, ParameterError> {
		if field.condition.is_some_and(|flag| !self.flag_enabled(flag)) {
			return Ok(None);
		}

		let supplied = self
			.source
			.parameter(self.item_index, field.param)
			.filter(|value| !is_unset(field.kind, value));
		let value = match supplied {
			Some(value) => value.clone(),
			None => match field.presence {
				Presence::Optional => return Ok(None),
				Presence::Required =>
					return Err(ParameterError::MissingRequired { field: field.param }),
				Presence::Default(default) => default.to_value(),
				Presence::Always => Value::Object(Map::new()),
			},
		};

		convert(field, value).map(Some)
	}

	fn flag_enabled(&self, name: &str) -> bool {
		match self.source.parameter(self.item_index, name) {
			Some(Value::Bool(flag)) => *flag,
			Some(Value::String(text)) => text == "true",
			_ => false,
		}
	}
}

/// Host forms that mean "nothing supplied" for a field of the given kind.
fn is_unset(kind: FieldKind, value: &Value) -> bool {
	match (kind, value) {
		(_, Value::Null) => true,
		(FieldKind::Text | FieldKind::TextList | FieldKind::Timestamp, Value::String(text)) =>
			text.is_empty(),
		(FieldKind::Json, Value::String(text)) => is_empty_json_text(text),
		(FieldKind::Json, Value::Object(map)) => map.is_empty(),
		_ => false,
	}
}

fn is_empty_json_text(text: &str) -> bool {
	let mut compact = text.chars().filter(|c| !c.is_whitespace());

	match compact.next() {
		None => true,
		Some('{') => compact.next() == Some('}') && compact.next().is_none(),
		Some(_) => false,
	}
}

fn convert(field: &FieldSpec, value: Value) -> Result<Value, ParameterError> {
	let invalid_type =
		|| ParameterError::InvalidType { field: field.param, expected: field.kind.expected() };

	match field.kind {
		FieldKind::Text => text(value).map(Value::String).ok_or_else(invalid_type),
		FieldKind::TextList => match value {
			Value::Array(values) if values.iter().all(Value::is_string) => Ok(Value::Array(values)),
			other => text(other)
				.map(|text| Value::Array(vec![Value::String(text)]))
				.ok_or_else(invalid_type),
		},
		FieldKind::Flag => match value {
			Value::Bool(flag) => Ok(Value::Bool(flag)),
			Value::String(text) if text == "true" => Ok(Value::Bool(true)),
			Value::String(text) if text == "false" => Ok(Value::Bool(false)),
			_ => Err(invalid_type()),
		},
		FieldKind::Number => match value {
			Value::Number(number) => Ok(Value::Number(number)),
			Value::String(text) => parse_number(text.trim()).ok_or_else(invalid_type),
			_ => Err(invalid_type()),
		},
		FieldKind::Json => match value {
			Value::String(text) => serde_json::from_str(&text)
				.map_err(|source| ParameterError::InvalidJson { field: field.param, source }),
			Value::Object(_) | Value::Array(_) => Ok(value),
			_ => Err(invalid_type()),
		},
		FieldKind::Timestamp => match value {
			Value::Number(number) => Ok(Value::Number(number)),
			Value::String(text) => epoch_millis(text.trim())
				.map(Value::from)
				.ok_or(ParameterError::InvalidTimestamp { field: field.param, value: text }),
			_ => Err(invalid_type()),
		},
	}
}

fn text(value: Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		_ => None,
	}
}

fn parse_number(text: &str) -> Option<Value> {
	if let Ok(integer) = text.parse::<i64>() {
		return Some(Value::from(integer));
	}

	text.parse::<f64>().ok().and_then(serde_json::Number::from_f64).map(Value::Number)
}

/// Converts RFC 3339, ISO 8601 local date-time (taken as UTC), or ISO 8601 date text into Unix
/// epoch milliseconds.
fn epoch_millis(text: &str) -> Option<i64> {
	let local = || {
		PrimitiveDateTime::parse(text, &Iso8601::DEFAULT).ok().map(PrimitiveDateTime::assume_utc)
	};
	let date = || Date::parse(text, &Iso8601::DEFAULT).ok().map(|d| d.midnight().assume_utc());
	let moment = OffsetDateTime::parse(text, &Rfc3339).ok().or_else(local).or_else(date)?;

	i64::try_from(moment.unix_timestamp_nanos() / 1_000_000).ok()
}

/// Renders a resolved value for a URL (query value or path segment).
fn query_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}
