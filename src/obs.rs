//! Optional observability helpers for strategy runs.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run every `authenticate` call inside a span named
//!   `oauth2_refresh_token.authenticate` with the `strategy` field, recording the final `outcome`
//!   (and the `reason` for failures) once the call resolves.
//! - Enable `metrics` to increment the `oauth2_refresh_token_authenticate_total` counter for every
//!   attempt/success/fail/error, labeled by `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutcomeLabel {
	/// Entry to `authenticate`.
	Attempt,
	/// Principal authenticated.
	Success,
	/// Credential missing or rejected.
	Fail,
	/// Verifier error.
	Error,
}
impl OutcomeLabel {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OutcomeLabel::Attempt => "attempt",
			OutcomeLabel::Success => "success",
			OutcomeLabel::Fail => "fail",
			OutcomeLabel::Error => "error",
		}
	}
}
impl Display for OutcomeLabel {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
