// self
use crate::obs::OutcomeLabel;

/// Records an authenticate outcome via the global metrics recorder (when enabled).
pub fn record_authenticate_outcome(outcome: OutcomeLabel) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth2_refresh_token_authenticate_total",
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = outcome;
	}
}
