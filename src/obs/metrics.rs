// self
use crate::obs::{Operation, RequestOutcome};

/// Bumps `communityone_request_total{operation, outcome}` by one.
///
/// Compiles to nothing unless the `metrics` feature is on.
pub fn record_request_outcome(operation: Operation, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"communityone_request_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

#[cfg(all(test, not(feature = "metrics")))]
mod tests {
	// self
	use super::*;

	#[test]
	fn outcomes_compile_away_without_metrics() {
		record_request_outcome(Operation::CustomQuests, RequestOutcome::Attempt);
		record_request_outcome(Operation::CompleteCustomQuest, RequestOutcome::Failure);
	}
}
