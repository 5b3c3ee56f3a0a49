// self
use crate::obs::{RejectReason, ValidateOutcome};

/// Counter bumped once per attempt and once per verdict.
pub const VALIDATE_TOTAL: &str = "auth_provider_validate_total";
/// Counter bumped for every rejection, labeled by its reason.
pub const REJECTION_TOTAL: &str = "auth_provider_rejection_total";

/// Records a validation outcome via the global metrics recorder (when enabled).
pub fn record_validate_outcome(provider: &'static str, outcome: ValidateOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(VALIDATE_TOTAL, "provider" => provider, "outcome" => outcome.as_str())
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (provider, outcome);
	}
}

/// Records why a credential was turned away.
///
/// Complements the `rejected` outcome of [`VALIDATE_TOTAL`] so dashboards can tell a
/// missing token apart from a token minted for another client.
pub fn record_rejection(provider: &'static str, reason: RejectReason) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(REJECTION_TOTAL, "provider" => provider, "reason" => reason.as_str())
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (provider, reason);
	}
}
