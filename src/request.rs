//! Request view consumed by the strategy.
//!
//! The strategy only needs read access to a parsed body, so hosts implement [`AuthRequest`]
//! for their own request type. [`Request`] is a minimal owned implementation for hosts that
//! do not have one, and for tests.

pub mod body;

pub use body::RequestBody;

// self
use crate::_prelude::*;

/// Read-only request contract required by the strategy.
pub trait AuthRequest
where
	Self: Send + Sync,
{
	/// Returns the parsed body, or `None` when the request carried no body.
	fn body(&self) -> Option<&RequestBody>;
}
impl<T> AuthRequest for Arc<T>
where
	T: ?Sized + AuthRequest,
{
	fn body(&self) -> Option<&RequestBody> {
		T::body(self)
	}
}

/// Owned request carrying an optional body and string parameters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Request {
	/// Parsed body, if the request had one.
	pub body: Option<RequestBody>,
	/// Route or query parameters.
	pub params: BTreeMap<String, String>,
}
impl Request {
	/// Creates a request without a body or parameters.
	pub fn new() -> Self {
		Self::default()
	}

	/// Attaches a parsed body.
	pub fn with_body(mut self, body: RequestBody) -> Self {
		self.body = Some(body);

		self
	}

	/// Adds a single parameter.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.params.insert(key.into(), value.into());

		self
	}

	/// Returns a parameter by name.
	pub fn param(&self, key: &str) -> Option<&str> {
		self.params.get(key).map(String::as_str)
	}
}
impl AuthRequest for Request {
	fn body(&self) -> Option<&RequestBody> {
		self.body.as_ref()
	}
}
