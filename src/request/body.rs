//! Parsed request bodies (form-encoded or JSON).

// self
use crate::{REFRESH_TOKEN_FIELD, _prelude::*, error::BodyError};

/// Key-value view of a parsed request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestBody(BTreeMap<String, JsonValue>);
impl RequestBody {
	/// Creates an empty body.
	pub fn new() -> Self {
		Self::default()
	}

	/// Parses an `application/x-www-form-urlencoded` payload.
	///
	/// OAuth 2.0 token requests must not repeat parameters, so a repeated field is rejected.
	pub fn from_form_urlencoded(payload: &str) -> Result<Self> {
		let mut fields = BTreeMap::new();

		for (key, value) in url::form_urlencoded::parse(payload.as_bytes()) {
			let key = key.into_owned();

			if fields.contains_key(&key) {
				return Err(BodyError::DuplicateField { field: key }.into());
			}

			fields.insert(key, JsonValue::String(value.into_owned()));
		}

		Ok(Self(fields))
	}

	/// Parses an `application/json` payload, which must be an object.
	pub fn from_json_str(payload: &str) -> Result<Self> {
		let de = &mut serde_json::Deserializer::from_str(payload);
		let value: JsonValue =
			serde_path_to_error::deserialize(de).map_err(|source| BodyError::Json { source })?;

		match value {
			JsonValue::Object(map) => Ok(Self(map.into_iter().collect())),
			_ => Err(BodyError::NotAnObject.into()),
		}
	}

	/// Sets a field, replacing any previous value.
	pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
		self.0.insert(key.into(), value.into());

		self
	}

	/// Returns a raw field value.
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Returns the refresh token when present as a non-empty string.
	pub fn refresh_token(&self) -> Option<&str> {
		match self.get(REFRESH_TOKEN_FIELD)? {
			JsonValue::String(token) if !token.is_empty() => Some(token),
			_ => None,
		}
	}

	/// Returns `true` when the body has no fields.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn form_payload_exposes_refresh_token() {
		let body = RequestBody::from_form_urlencoded(
			"grant_type=refresh_token&refresh_token=tGzv3JOkF0XG5Qx2TlKWIA",
		)
		.expect("Form payload should parse.");

		assert_eq!(body.refresh_token(), Some("tGzv3JOkF0XG5Qx2TlKWIA"));
		assert_eq!(body.get("grant_type"), Some(&JsonValue::from("refresh_token")));
	}

	#[test]
	fn form_payload_decodes_percent_escapes() {
		let body = RequestBody::from_form_urlencoded("refresh_token=a%2Fb+c")
			.expect("Escaped form payload should parse.");

		assert_eq!(body.refresh_token(), Some("a/b c"));
	}

	#[test]
	fn form_payload_rejects_repeated_fields() {
		let err = RequestBody::from_form_urlencoded("refresh_token=a&refresh_token=b")
			.expect_err("Repeated refresh_token must be rejected.");

		assert!(matches!(
			err,
			Error::Body(BodyError::DuplicateField { field }) if field == "refresh_token"
		));
	}

	#[test]
	fn json_payload_requires_object() {
		let body = RequestBody::from_json_str(r#"{"refresh_token":"rftkn","scope":"email"}"#)
			.expect("JSON object should parse.");

		assert_eq!(body.refresh_token(), Some("rftkn"));
		assert!(matches!(
			RequestBody::from_json_str("[1,2]"),
			Err(Error::Body(BodyError::NotAnObject))
		));
		assert!(matches!(
			RequestBody::from_json_str("{\"a\":"),
			Err(Error::Body(BodyError::Json { .. }))
		));
	}

	#[test]
	fn empty_or_non_string_tokens_are_absent() {
		assert_eq!(RequestBody::new().refresh_token(), None);
		assert_eq!(RequestBody::new().with_field("refresh_token", "").refresh_token(), None);
		assert_eq!(RequestBody::new().with_field("refresh_token", 42).refresh_token(), None);
		assert_eq!(
			RequestBody::new().with_field("refresh_token", JsonValue::Null).refresh_token(),
			None
		);
		assert!(RequestBody::new().is_empty());
	}
}
