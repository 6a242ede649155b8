// std
use std::sync::atomic::{AtomicU64, Ordering};
// self
use crate::obs::OutcomeLabel;

/// Thread-safe counters for authenticate calls.
#[derive(Debug, Default)]
pub struct StrategyMetrics {
	attempts: AtomicU64,
	success: AtomicU64,
	failure: AtomicU64,
	error: AtomicU64,
}
impl StrategyMetrics {
	/// Returns the total number of authenticate calls.
	pub fn attempts(&self) -> u64 {
		self.attempts.load(Ordering::Relaxed)
	}

	/// Returns the number of calls that authenticated a principal.
	pub fn successes(&self) -> u64 {
		self.success.load(Ordering::Relaxed)
	}

	/// Returns the number of calls with a missing or rejected credential.
	pub fn failures(&self) -> u64 {
		self.failure.load(Ordering::Relaxed)
	}

	/// Returns the number of calls where the verifier reported an error.
	pub fn errors(&self) -> u64 {
		self.error.load(Ordering::Relaxed)
	}

	pub(crate) fn record_attempt(&self) {
		self.attempts.fetch_add(1, Ordering::Relaxed);
	}

	pub(crate) fn record(&self, outcome: OutcomeLabel) {
		let counter = match outcome {
			OutcomeLabel::Attempt => &self.attempts,
			OutcomeLabel::Success => &self.success,
			OutcomeLabel::Fail => &self.failure,
			OutcomeLabel::Error => &self.error,
		};

		counter.fetch_add(1, Ordering::Relaxed);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_routes_labels_to_counters() {
		let metrics = StrategyMetrics::default();

		metrics.record_attempt();
		metrics.record(OutcomeLabel::Error);
		metrics.record(OutcomeLabel::Fail);
		metrics.record(OutcomeLabel::Fail);

		assert_eq!(metrics.attempts(), 1);
		assert_eq!(metrics.successes(), 0);
		assert_eq!(metrics.failures(), 2);
		assert_eq!(metrics.errors(), 1);
	}
}
