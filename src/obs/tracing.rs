// self
use crate::{_prelude::*, obs::RejectReason};
#[cfg(feature = "tracing")] use crate::obs::ValidateOutcome;

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedValidation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedValidation<F> = F;

/// Span wrapping a single provider validation.
#[derive(Clone, Debug)]
pub struct ValidateSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ValidateSpan {
	/// Creates a new span tagged with the provider name.
	pub fn new(provider: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("auth_provider.validate", provider);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = provider;

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedValidation<Fut>
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

/// Emits a `debug` event for a routine rejection.
pub fn trace_rejection(provider: &'static str, reason: RejectReason) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			provider,
			outcome = ValidateOutcome::Rejected.as_str(),
			reason = reason.as_str(),
			"Credential not validated."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (provider, reason);
	}
}

/// Emits a `warn` event for a failure the caller should act on.
pub fn trace_failure(provider: &'static str, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			provider,
			outcome = ValidateOutcome::Failure.as_str(),
			error = %error,
			"Validation failed."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (provider, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::TransportError;

	#[test]
	fn helpers_noop_without_tracing() {
		trace_rejection("google", RejectReason::AudienceMismatch);
		trace_failure("google", &TransportError::Cancelled.into());
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = ValidateSpan::new("google");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
