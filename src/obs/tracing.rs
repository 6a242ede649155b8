// self
use crate::{_prelude::*, obs::OutcomeLabel, outcome::FailReason};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedAuthenticate<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedAuthenticate<F> = F;

/// Span wrapping a single `authenticate` call.
#[derive(Clone, Debug)]
pub struct AuthenticateSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl AuthenticateSpan {
	/// Creates a new span tagged with the strategy name.
	pub fn new(strategy: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth2_refresh_token.authenticate",
				strategy,
				outcome = tracing::field::Empty,
				reason = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = strategy;

			Self {}
		}
	}

	/// Records the resolved outcome, plus the failure reason when there is one.
	pub fn record_outcome(&self, outcome: OutcomeLabel, reason: Option<FailReason>) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());

			if let Some(reason) = reason {
				self.span.record("reason", reason.as_str());
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (outcome, reason);
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedAuthenticate<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}
