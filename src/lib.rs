//! OAuth 2.0 refresh token authentication strategy: extract the `refresh_token` credential from
//! a request body, delegate validation to an integrator-supplied verifier, and report exactly
//! one typed outcome back to the host framework.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod obs;
pub mod outcome;
pub mod request;
pub mod strategy;
pub mod verify;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// std
	use std::sync::{Mutex, PoisonError};
	// self
	use crate::{
		outcome::OutcomeHooks,
		request::{Request, RequestBody},
		verify::VerifyError,
	};

	type Calls<P, I> = Arc<Mutex<Vec<HookCall<P, I>>>>;

	/// Single hook invocation captured by [`RecordingHooks`].
	#[derive(Clone, Debug, PartialEq)]
	pub enum HookCall<P, I> {
		/// `success` with the principal and optional info.
		Success(P, Option<I>),
		/// `fail` with the challenge and status.
		Fail(Option<String>, Option<u16>),
		/// `error` with the rendered verifier error.
		Error(String),
	}

	/// Shared log of hook invocations.
	#[derive(Debug)]
	pub struct HookLog<P, I>(Calls<P, I>);
	impl<P, I> HookLog<P, I> {
		/// Creates an empty log.
		pub fn new() -> Self {
			Self(Default::default())
		}

		/// Returns hooks that append to this log.
		pub fn hooks(&self) -> RecordingHooks<P, I> {
			RecordingHooks(self.0.clone())
		}

		/// Returns a snapshot of the recorded calls.
		pub fn calls(&self) -> Vec<HookCall<P, I>>
		where
			P: Clone,
			I: Clone,
		{
			self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
		}
	}
	impl<P, I> Default for HookLog<P, I> {
		fn default() -> Self {
			Self::new()
		}
	}

	/// [`OutcomeHooks`] implementation that appends to a [`HookLog`].
	#[derive(Debug)]
	pub struct RecordingHooks<P, I>(Calls<P, I>);
	impl<P, I> RecordingHooks<P, I> {
		fn push(&self, call: HookCall<P, I>) {
			self.0.lock().unwrap_or_else(PoisonError::into_inner).push(call);
		}
	}
	impl<P, I> OutcomeHooks<P, I> for RecordingHooks<P, I> {
		type Output = ();

		fn success(self, principal: P, info: Option<I>) {
			self.push(HookCall::Success(principal, info));
		}

		fn fail(self, challenge: Option<String>, status: Option<u16>) {
			self.push(HookCall::Fail(challenge, status));
		}

		fn error(self, err: VerifyError) {
			self.push(HookCall::Error(err.to_string()));
		}
	}

	/// Builds a request whose body carries the provided `refresh_token` value.
	pub fn request_with_token(token: &str) -> Request {
		Request::new().with_body(RequestBody::new().with_field("refresh_token", token))
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use oauth2::RefreshToken;
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;

	pub use crate::error::{Error, Result};
}

pub use oauth2;
pub use oauth2::RefreshToken;

pub use outcome::{FailReason, Outcome, OutcomeHooks};
pub use request::{AuthRequest, Request, RequestBody};
pub use strategy::{RefreshTokenStrategy, Strategy, StrategyOptions};
pub use verify::{Verified, VerifyError, VerifyResult};

/// Name under which the strategy registers with a host framework.
pub const STRATEGY_NAME: &str = "oauth2-refresh-token";
/// Request body field carrying the refresh token credential.
pub const REFRESH_TOKEN_FIELD: &str = "refresh_token";
/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
