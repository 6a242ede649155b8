// self
use crate::{
	_prelude::*,
	error::ConfigError,
	strategy::{RefreshTokenStrategy, StrategyOptions},
	verify::{Verifier, VerifyResult, VerifyToken, VerifyTokenWithRequest},
};

/// Builder for [`RefreshTokenStrategy`] values.
pub struct RefreshTokenStrategyBuilder<P, I, R>
where
	R: ?Sized,
{
	/// Options the strategy is built with.
	pub options: StrategyOptions,
	verifier: Option<Verifier<R, P, I>>,
}
impl<P, I, R> RefreshTokenStrategyBuilder<P, I, R>
where
	R: ?Sized,
{
	/// Creates a builder seeded with the provided options and no verifier.
	pub fn new(options: StrategyOptions) -> Self {
		Self { options, verifier: None }
	}

	/// Replaces the options.
	pub fn options(mut self, options: StrategyOptions) -> Self {
		self.options = options;

		self
	}

	/// Overrides the `pass_req_to_callback` option.
	pub fn pass_req_to_callback(mut self, pass_req_to_callback: bool) -> Self {
		self.options = self.options.with_pass_req_to_callback(pass_req_to_callback);

		self
	}

	/// Sets a verifier closure that receives only the token.
	pub fn verify<F, Fut>(self, verify: F) -> Self
	where
		F: 'static + Send + Sync + Fn(RefreshToken) -> Fut,
		Fut: 'static + Send + Future<Output = VerifyResult<P, I>>,
	{
		self.token_verifier(verify)
	}

	/// Sets a verifier closure that receives the request before the token.
	pub fn verify_with_request<F, Fut>(self, verify: F) -> Self
	where
		F: 'static + Send + Sync + Fn(&R, RefreshToken) -> Fut,
		Fut: 'static + Send + Future<Output = VerifyResult<P, I>>,
	{
		self.request_verifier(verify)
	}

	/// Sets a [`VerifyToken`] implementation.
	pub fn token_verifier(mut self, verifier: impl 'static + VerifyToken<P, I>) -> Self {
		self.verifier = Some(Verifier::Token(Arc::new(verifier)));

		self
	}

	/// Sets a [`VerifyTokenWithRequest`] implementation.
	pub fn request_verifier(
		mut self,
		verifier: impl 'static + VerifyTokenWithRequest<R, P, I>,
	) -> Self {
		self.verifier = Some(Verifier::WithRequest(Arc::new(verifier)));

		self
	}

	/// Consumes the builder and validates the resulting strategy.
	///
	/// A verifier is required, and its calling convention must agree with
	/// [`StrategyOptions::pass_req_to_callback`].
	pub fn build(self) -> Result<RefreshTokenStrategy<P, I, R>> {
		let verifier = self.verifier.ok_or(ConfigError::MissingVerifyFunction)?;

		if verifier.takes_request() != self.options.pass_req_to_callback {
			return Err(ConfigError::CallingConventionMismatch {
				pass_req_to_callback: self.options.pass_req_to_callback,
			}
			.into());
		}

		Ok(RefreshTokenStrategy::from_verifier(verifier))
	}
}
impl<P, I, R> Debug for RefreshTokenStrategyBuilder<P, I, R>
where
	R: ?Sized,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RefreshTokenStrategyBuilder")
			.field("options", &self.options)
			.field("verifier", &self.verifier)
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{request::Request, verify::Verified};

	type Builder = RefreshTokenStrategyBuilder<u32, (), Request>;

	#[test]
	fn build_requires_verifier() {
		let err = Builder::new(StrategyOptions::default())
			.build()
			.expect_err("Builder without a verifier must fail.");

		assert!(matches!(err, Error::Config(ConfigError::MissingVerifyFunction)));

		let err = Builder::new(StrategyOptions::default().with_pass_req_to_callback(true))
			.build()
			.expect_err("Options-only builder must fail.");

		assert!(matches!(err, Error::Config(ConfigError::MissingVerifyFunction)));
	}

	#[test]
	fn build_rejects_convention_mismatch() {
		let err = Builder::new(StrategyOptions::default())
			.pass_req_to_callback(true)
			.verify(|_token: RefreshToken| async move { Ok(Verified::Rejected) })
			.build()
			.expect_err("Token-only verifier cannot satisfy pass_req_to_callback.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::CallingConventionMismatch { pass_req_to_callback: true })
		));

		let err = Builder::new(StrategyOptions::default())
			.verify_with_request(|_request: &Request, _token: RefreshToken| async move {
				Ok(Verified::Rejected)
			})
			.build()
			.expect_err("Request-aware verifier requires pass_req_to_callback.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::CallingConventionMismatch { pass_req_to_callback: false })
		));
	}

	#[test]
	fn build_accepts_matching_convention() {
		let strategy = Builder::new(StrategyOptions::default().with_pass_req_to_callback(true))
			.verify_with_request(|_request: &Request, _token: RefreshToken| async move {
				Ok(Verified::principal(1))
			})
			.build()
			.expect("Matching convention should build.");

		assert!(strategy.pass_req_to_callback());
	}
}
