//! Authentication outcomes reported to the host framework.
//!
//! [`Outcome`] is the single result of one `authenticate` call. Hosts either match on it or
//! hand it an [`OutcomeHooks`] implementation via [`Outcome::dispatch`]; the hooks are
//! consumed, so exactly one of them runs exactly once.

// self
use crate::{_prelude::*, obs::OutcomeLabel, verify::VerifyError};

/// Continuation hooks owned by the host framework.
pub trait OutcomeHooks<P, I> {
	/// Value produced by whichever hook runs.
	type Output;

	/// Authentication succeeded for `principal`.
	fn success(self, principal: P, info: Option<I>) -> Self::Output;

	/// Authentication failed. The strategy leaves `challenge` and `status` unset so the host
	/// applies its defaults.
	fn fail(self, challenge: Option<String>, status: Option<u16>) -> Self::Output;

	/// Verification hit an unexpected failure.
	fn error(self, err: VerifyError) -> Self::Output;
}

/// Result of a single `authenticate` call.
#[derive(Debug)]
pub enum Outcome<P, I> {
	/// The credential identified a principal.
	Success {
		/// Authenticated identity.
		principal: P,
		/// Auxiliary data supplied by the verifier, unchanged.
		info: Option<I>,
	},
	/// No valid credential was presented.
	Fail(FailReason),
	/// The verifier reported an internal error.
	Error(VerifyError),
}
impl<P, I> Outcome<P, I> {
	/// Returns the label used for spans and metrics.
	pub fn label(&self) -> OutcomeLabel {
		match self {
			Self::Success { .. } => OutcomeLabel::Success,
			Self::Fail(_) => OutcomeLabel::Fail,
			Self::Error(_) => OutcomeLabel::Error,
		}
	}

	/// Returns `true` for [`Outcome::Success`].
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success { .. })
	}

	/// Returns the principal on success.
	pub fn principal(&self) -> Option<&P> {
		match self {
			Self::Success { principal, .. } => Some(principal),
			_ => None,
		}
	}

	/// Invokes exactly one hook for this outcome.
	pub fn dispatch<H>(self, hooks: H) -> H::Output
	where
		H: OutcomeHooks<P, I>,
	{
		match self {
			Self::Success { principal, info } => hooks.success(principal, info),
			Self::Fail(_) => hooks.fail(None, None),
			Self::Error(err) => hooks.error(err),
		}
	}
}

/// Why an authentication attempt failed without an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FailReason {
	/// The request had no body or no non-empty `refresh_token`; no verification ran.
	MissingCredential,
	/// The verifier declined the presented token.
	Rejected,
}
impl FailReason {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FailReason::MissingCredential => "missing_credential",
			FailReason::Rejected => "rejected",
		}
	}
}
impl Display for FailReason {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
