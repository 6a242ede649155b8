//! Verification contracts supplied by integrators.
//!
//! A verifier looks up the presented refresh token and decides whether it is valid. Two
//! calling conventions exist: [`VerifyToken`] receives only the token, while
//! [`VerifyTokenWithRequest`] also receives the original request. Plain async closures
//! implement both traits through blanket impls. The convention is fixed once at construction
//! and stored as a [`Verifier`].

// self
use crate::_prelude::*;

type BoxError = Box<dyn StdError + Send + Sync>;

/// Boxed future returned by verifiers.
pub type VerifyFuture<'a, P, I> = Pin<Box<dyn Future<Output = VerifyResult<P, I>> + 'a + Send>>;

/// Result produced by a single verification run.
pub type VerifyResult<P, I> = Result<Verified<P, I>, VerifyError>;

/// Verifier that only inspects the refresh token.
pub trait VerifyToken<P, I>
where
	Self: Send + Sync,
{
	/// Decides whether the token identifies a principal.
	fn verify(&self, token: RefreshToken) -> VerifyFuture<'_, P, I>;
}
impl<F, Fut, P, I> VerifyToken<P, I> for F
where
	F: Send + Sync + Fn(RefreshToken) -> Fut,
	Fut: 'static + Send + Future<Output = VerifyResult<P, I>>,
{
	fn verify(&self, token: RefreshToken) -> VerifyFuture<'_, P, I> {
		Box::pin(self(token))
	}
}

/// Verifier that also receives the original request.
pub trait VerifyTokenWithRequest<R, P, I>
where
	Self: Send + Sync,
	R: ?Sized,
{
	/// Decides whether the token identifies a principal, with access to the request.
	fn verify<'a>(&'a self, request: &'a R, token: RefreshToken) -> VerifyFuture<'a, P, I>;
}
impl<F, Fut, R, P, I> VerifyTokenWithRequest<R, P, I> for F
where
	F: Send + Sync + Fn(&R, RefreshToken) -> Fut,
	Fut: 'static + Send + Future<Output = VerifyResult<P, I>>,
	R: ?Sized,
{
	fn verify<'a>(&'a self, request: &'a R, token: RefreshToken) -> VerifyFuture<'a, P, I> {
		Box::pin(self(request, token))
	}
}

/// Verification function tagged with its calling convention.
pub enum Verifier<R, P, I>
where
	R: ?Sized,
{
	/// Called as `verify(token)`.
	Token(Arc<dyn VerifyToken<P, I>>),
	/// Called as `verify(request, token)`.
	WithRequest(Arc<dyn VerifyTokenWithRequest<R, P, I>>),
}
impl<R, P, I> Verifier<R, P, I>
where
	R: ?Sized,
{
	/// Returns `true` when the verifier expects the request as its first argument.
	pub fn takes_request(&self) -> bool {
		matches!(self, Self::WithRequest(_))
	}

	/// Runs the verifier with the convention selected at construction.
	pub fn verify<'a>(&'a self, request: &'a R, token: RefreshToken) -> VerifyFuture<'a, P, I> {
		match self {
			Self::Token(verifier) => verifier.verify(token),
			Self::WithRequest(verifier) => verifier.verify(request, token),
		}
	}
}
impl<R, P, I> Clone for Verifier<R, P, I>
where
	R: ?Sized,
{
	fn clone(&self) -> Self {
		match self {
			Self::Token(verifier) => Self::Token(verifier.clone()),
			Self::WithRequest(verifier) => Self::WithRequest(verifier.clone()),
		}
	}
}
impl<R, P, I> Debug for Verifier<R, P, I>
where
	R: ?Sized,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Token(_) => f.write_str("Verifier::Token(..)"),
			Self::WithRequest(_) => f.write_str("Verifier::WithRequest(..)"),
		}
	}
}

/// Decision reached by a verifier that completed without an internal error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verified<P, I> {
	/// The token identifies a principal.
	Principal {
		/// Authenticated identity, opaque to the strategy.
		principal: P,
		/// Optional auxiliary data forwarded unchanged.
		info: Option<I>,
	},
	/// The token was presented but is not valid.
	Rejected,
}
impl<P, I> Verified<P, I> {
	/// Accepts the token for the given principal, without extra info.
	pub fn principal(principal: P) -> Self {
		Self::Principal { principal, info: None }
	}

	/// Accepts the token for the given principal and forwards `info`.
	pub fn with_info(principal: P, info: I) -> Self {
		Self::Principal { principal, info: Some(info) }
	}
}
impl<P, I> From<Option<P>> for Verified<P, I> {
	fn from(principal: Option<P>) -> Self {
		match principal {
			Some(principal) => Self::principal(principal),
			None => Self::Rejected,
		}
	}
}

/// Unexpected failure reported by a verifier (backing store fault, etc.).
///
/// Distinct from a rejected credential: it is surfaced to the host as a server error.
#[derive(Debug)]
pub struct VerifyError(BoxError);
impl VerifyError {
	/// Wraps an arbitrary error.
	pub fn new(src: impl 'static + Send + Sync + StdError) -> Self {
		Self(Box::new(src))
	}

	/// Creates an error from a plain message.
	pub fn message(message: impl Into<String>) -> Self {
		Self::new(MessageError(message.into()))
	}

	/// Returns the wrapped error.
	pub fn into_inner(self) -> BoxError {
		self.0
	}
}
impl Display for VerifyError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		Display::fmt(&self.0, f)
	}
}
impl StdError for VerifyError {
	fn source(&self) -> Option<&(dyn StdError + 'static)> {
		self.0.source()
	}
}

#[derive(Debug, ThisError)]
#[error("{0}")]
struct MessageError(String);
