//! Refresh token strategy and the host-facing [`Strategy`] contract.
//!
//! [`RefreshTokenStrategy::authenticate`] reads `refresh_token` from the request body, awaits
//! the configured verifier, and maps its decision onto exactly one [`Outcome`]:
//!
//! - no body or no non-empty token: [`Outcome::Fail`] with [`FailReason::MissingCredential`],
//!   the verifier is never called;
//! - verifier error: [`Outcome::Error`];
//! - verifier rejection: [`Outcome::Fail`] with [`FailReason::Rejected`];
//! - verifier acceptance: [`Outcome::Success`] carrying the principal and optional info.
//!
//! There is no timeout at this layer. A verifier future that never resolves leaves the call
//! pending; wrap the verifier (or the call) with a timeout when that matters.

mod builder;
mod metrics;
mod options;

pub use builder::RefreshTokenStrategyBuilder;
pub use metrics::StrategyMetrics;
pub use options::StrategyOptions;

// self
use crate::{
	STRATEGY_NAME,
	_prelude::*,
	obs::{self, AuthenticateSpan, OutcomeLabel},
	outcome::{FailReason, Outcome, OutcomeHooks},
	request::{AuthRequest, Request},
	verify::{Verified, Verifier, VerifyResult},
};

/// Boxed future returned by [`Strategy::authenticate`].
pub type AuthenticateFuture<'a, P, I> = Pin<Box<dyn Future<Output = Outcome<P, I>> + 'a + Send>>;

/// Contract a host framework uses to drive a registered strategy.
pub trait Strategy<R>
where
	Self: Send + Sync,
	R: ?Sized,
{
	/// Authenticated identity type.
	type Principal;
	/// Auxiliary success data type.
	type Info;

	/// Name used for strategy lookup.
	fn name(&self) -> &str;

	/// Authenticates a single request.
	fn authenticate<'a>(
		&'a self,
		request: &'a R,
	) -> AuthenticateFuture<'a, Self::Principal, Self::Info>;
}

/// Strategy authenticating requests by the `refresh_token` body field.
pub struct RefreshTokenStrategy<P, I, R = Request>
where
	R: ?Sized,
{
	verifier: Verifier<R, P, I>,
	metrics: Arc<StrategyMetrics>,
}
impl<P, I, R> RefreshTokenStrategy<P, I, R>
where
	R: ?Sized,
{
	/// Creates a strategy whose verifier receives only the token.
	pub fn new<F, Fut>(verify: F) -> Self
	where
		F: 'static + Send + Sync + Fn(RefreshToken) -> Fut,
		Fut: 'static + Send + Future<Output = VerifyResult<P, I>>,
	{
		Self::from_verifier(Verifier::Token(Arc::new(verify)))
	}

	/// Creates a strategy whose verifier receives the request before the token.
	pub fn with_request<F, Fut>(verify: F) -> Self
	where
		F: 'static + Send + Sync + Fn(&R, RefreshToken) -> Fut,
		Fut: 'static + Send + Future<Output = VerifyResult<P, I>>,
	{
		Self::from_verifier(Verifier::WithRequest(Arc::new(verify)))
	}

	/// Creates a builder with default options.
	pub fn builder() -> RefreshTokenStrategyBuilder<P, I, R> {
		RefreshTokenStrategyBuilder::new(StrategyOptions::default())
	}

	/// Creates a builder seeded with the provided options.
	pub fn builder_with_options(options: StrategyOptions) -> RefreshTokenStrategyBuilder<P, I, R> {
		RefreshTokenStrategyBuilder::new(options)
	}

	pub(crate) fn from_verifier(verifier: Verifier<R, P, I>) -> Self {
		Self { verifier, metrics: Default::default() }
	}

	/// Returns the strategy name, always [`STRATEGY_NAME`].
	pub fn name(&self) -> &'static str {
		STRATEGY_NAME
	}

	/// Returns `true` when the verifier receives the request as its first argument.
	pub fn pass_req_to_callback(&self) -> bool {
		self.verifier.takes_request()
	}

	/// Returns the options equivalent to this strategy's configuration.
	pub fn options(&self) -> StrategyOptions {
		StrategyOptions::default().with_pass_req_to_callback(self.pass_req_to_callback())
	}

	/// Returns the counters shared by this strategy and its clones.
	pub fn metrics(&self) -> &StrategyMetrics {
		&self.metrics
	}
}
impl<P, I, R> RefreshTokenStrategy<P, I, R>
where
	R: ?Sized + AuthRequest,
{
	/// Authenticates a request and returns its single outcome.
	pub async fn authenticate(&self, request: &R) -> Outcome<P, I> {
		let span = AuthenticateSpan::new(STRATEGY_NAME);

		obs::record_authenticate_outcome(OutcomeLabel::Attempt);
		self.metrics.record_attempt();

		let outcome = span.instrument(self.run(request)).await;
		let label = outcome.label();
		let reason = match &outcome {
			Outcome::Fail(reason) => Some(*reason),
			_ => None,
		};

		span.record_outcome(label, reason);
		obs::record_authenticate_outcome(label);
		self.metrics.record(label);

		outcome
	}

	/// Authenticates a request and hands the outcome to exactly one of `hooks`.
	pub async fn authenticate_with<H>(&self, request: &R, hooks: H) -> H::Output
	where
		H: OutcomeHooks<P, I>,
	{
		self.authenticate(request).await.dispatch(hooks)
	}

	async fn run(&self, request: &R) -> Outcome<P, I> {
		let Some(token) = request.body().and_then(|body| body.refresh_token()) else {
			return Outcome::Fail(FailReason::MissingCredential);
		};
		let token = RefreshToken::new(token.to_owned());

		match self.verifier.verify(request, token).await {
			Err(err) => Outcome::Error(err),
			Ok(Verified::Rejected) => Outcome::Fail(FailReason::Rejected),
			Ok(Verified::Principal { principal, info }) => Outcome::Success { principal, info },
		}
	}
}
impl<P, I, R> Strategy<R> for RefreshTokenStrategy<P, I, R>
where
	P: 'static + Send,
	I: 'static + Send,
	R: ?Sized + AuthRequest,
{
	type Info = I;
	type Principal = P;

	fn name(&self) -> &str {
		STRATEGY_NAME
	}

	fn authenticate<'a>(&'a self, request: &'a R) -> AuthenticateFuture<'a, P, I> {
		Box::pin(RefreshTokenStrategy::authenticate(self, request))
	}
}
impl<P, I, R> Clone for RefreshTokenStrategy<P, I, R>
where
	R: ?Sized,
{
	fn clone(&self) -> Self {
		Self { verifier: self.verifier.clone(), metrics: self.metrics.clone() }
	}
}
impl<P, I, R> Debug for RefreshTokenStrategy<P, I, R>
where
	R: ?Sized,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RefreshTokenStrategy")
			.field("name", &STRATEGY_NAME)
			.field("verifier", &self.verifier)
			.field("metrics", &self.metrics)
			.finish()
	}
}
