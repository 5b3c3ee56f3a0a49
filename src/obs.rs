//! Optional observability helpers for provider validations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to run each validation inside an `auth_provider.validate` span with the
//!   `provider` field, plus `debug` events for rejections and `warn` events for failures.
//! - Enable `metrics` to increment the `auth_provider_validate_total` counter for every
//!   attempt/verdict, labeled by `provider` + `outcome`, and `auth_provider_rejection_total`
//!   for every rejection, labeled by `provider` + `reason`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Outcome labels recorded for each validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidateOutcome {
	/// Entry to a provider's `validate`.
	Attempt,
	/// Credential accepted.
	Validated,
	/// Credential not accepted; routine, not an error.
	Rejected,
	/// Infrastructure or protocol failure propagated to the caller.
	Failure,
}
impl ValidateOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			ValidateOutcome::Attempt => "attempt",
			ValidateOutcome::Validated => "validated",
			ValidateOutcome::Rejected => "rejected",
			ValidateOutcome::Failure => "failure",
		}
	}
}
impl Display for ValidateOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Why a credential ended up not validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
	/// The argument bag has no token entry.
	MissingToken,
	/// The token entry is not a string.
	MalformedToken,
	/// The issuer answered with a non-success status.
	IssuerStatus,
	/// The token was minted for another client.
	AudienceMismatch,
	/// The issuer returned an empty subject.
	EmptySubject,
}
impl RejectReason {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RejectReason::MissingToken => "missing_token",
			RejectReason::MalformedToken => "malformed_token",
			RejectReason::IssuerStatus => "issuer_status",
			RejectReason::AudienceMismatch => "audience_mismatch",
			RejectReason::EmptySubject => "empty_subject",
		}
	}
}
impl Display for RejectReason {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
