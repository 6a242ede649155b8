//! Crate-level error types shared by strategy construction and request parsing.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical crate error exposed by public APIs.
///
/// Per-request authentication failures never surface here; they are reported through
/// [`Outcome`](crate::outcome::Outcome).
#[derive(Debug, ThisError)]
pub enum Error {
	/// Strategy setup problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Request body could not be parsed.
	#[error(transparent)]
	Body(#[from] BodyError),
}

/// Configuration failures raised while building a strategy.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// No verification function was supplied.
	#[error("OAuth 2.0 refresh token strategy requires a verify function.")]
	MissingVerifyFunction,
	/// The options flag disagrees with the supplied verification function.
	#[error(
		"The pass_req_to_callback option is {pass_req_to_callback}, but the verify function uses the other calling convention."
	)]
	CallingConventionMismatch {
		/// Value of the `pass_req_to_callback` option.
		pass_req_to_callback: bool,
	},
	/// Strategy options could not be deserialized.
	#[error("Strategy options are invalid at `{}`.", .source.path())]
	InvalidOptions {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Request body parsing failures.
#[derive(Debug, ThisError)]
pub enum BodyError {
	/// JSON body is malformed.
	#[error("Request body contains malformed JSON at `{}`.", .source.path())]
	Json {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// JSON body is valid but not an object.
	#[error("Request body must be a JSON object.")]
	NotAnObject,
	/// Form body repeats a field.
	#[error("Request body repeats the `{field}` field.")]
	DuplicateField {
		/// Repeated field name.
		field: String,
	},
}
