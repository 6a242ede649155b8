//! Construction-time strategy options.

// self
use crate::{_prelude::*, error::ConfigError};

/// Options fixed when a strategy is built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyOptions {
	/// Passes the request to the verifier ahead of the token when `true`.
	#[serde(default, alias = "passReqToCallback")]
	pub pass_req_to_callback: bool,
}
impl StrategyOptions {
	/// Parses options from a JSON document, reporting the failing path on error.
	pub fn from_json_str(payload: &str) -> Result<Self> {
		let de = &mut serde_json::Deserializer::from_str(payload);

		serde_path_to_error::deserialize(de)
			.map_err(|source| ConfigError::InvalidOptions { source }.into())
	}

	/// Overrides the `pass_req_to_callback` flag.
	pub fn with_pass_req_to_callback(mut self, pass_req_to_callback: bool) -> Self {
		self.pass_req_to_callback = pass_req_to_callback;

		self
	}
}
