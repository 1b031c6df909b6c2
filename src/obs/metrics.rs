// self
use crate::{obs::SeedOutcome, store::EntityKind};

/// Records a category outcome via the global metrics recorder (when enabled).
pub fn record_seed_outcome(kind: EntityKind, outcome: SeedOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oidc_bootstrap_seed_total",
			"category" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_seed_outcome_noop_without_metrics() {
		record_seed_outcome(EntityKind::Client, SeedOutcome::Failure);
	}
}
