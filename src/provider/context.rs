//! Per-call execution context carrying the caller's deadline and cancellation signal.

// std
use std::time::{Duration, Instant};
// crates.io
use tokio_util::sync::CancellationToken;
// self
use crate::{_prelude::*, error::TransportError};

/// Deadline + cancellation bound to a single [`AuthProvider::validate`](crate::provider::AuthProvider::validate) call.
///
/// The default context never expires and is never cancelled. Dropping the validation
/// future aborts the in-flight request as well.
#[derive(Clone, Debug, Default)]
pub struct ValidateContext {
	deadline: Option<Instant>,
	cancellation: CancellationToken,
}
impl ValidateContext {
	/// Creates a context without deadline or cancellation.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an absolute deadline for the call.
	pub fn with_deadline(mut self, deadline: Instant) -> Self {
		self.deadline = Some(deadline);

		self
	}

	/// Sets a deadline relative to now.
	///
	/// A timeout too large to represent as an [`Instant`] leaves the call without a deadline.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.deadline = Instant::now().checked_add(timeout);

		self
	}

	/// Binds the call to an externally owned cancellation token.
	pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
		self.cancellation = token;

		self
	}

	/// Returns the configured deadline, if any.
	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	/// Returns the cancellation token observed by providers.
	pub fn cancellation(&self) -> &CancellationToken {
		&self.cancellation
	}

	/// Time left before the deadline.
	///
	/// Returns `Ok(None)` without a deadline and an error once the call is cancelled or
	/// the deadline has already passed, so providers can bail out before dispatching.
	pub fn remaining(&self) -> Result<Option<Duration>, TransportError> {
		if self.cancellation.is_cancelled() {
			return Err(TransportError::Cancelled);
		}

		match self.deadline {
			None => Ok(None),
			Some(deadline) => match deadline.checked_duration_since(Instant::now()) {
				Some(left) if !left.is_zero() => Ok(Some(left)),
				_ => Err(TransportError::DeadlineExceeded),
			},
		}
	}

	/// Drives `fut` to completion unless the context is cancelled first.
	pub async fn run<F>(&self, fut: F) -> Result<F::Output, TransportError>
	where
		F: Future,
	{
		self.cancellation.run_until_cancelled(fut).await.ok_or(TransportError::Cancelled)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn default_context_is_unbounded() {
		let ctx = ValidateContext::new();

		assert!(ctx.deadline().is_none());
		assert!(matches!(ctx.remaining(), Ok(None)));
	}

	#[test]
	fn elapsed_deadline_is_reported_before_dispatch() {
		let ctx = ValidateContext::new().with_deadline(Instant::now() - Duration::from_secs(1));

		assert!(matches!(ctx.remaining(), Err(TransportError::DeadlineExceeded)));

		let ctx = ValidateContext::new().with_timeout(Duration::from_secs(30));
		let left = ctx
			.remaining()
			.expect("Fresh deadline should not be elapsed.")
			.expect("Deadline should be reported.");

		assert!(left <= Duration::from_secs(30));
	}

	#[test]
	fn oversized_timeout_leaves_call_unbounded() {
		let ctx = ValidateContext::new().with_timeout(Duration::MAX);

		assert!(ctx.deadline().is_none());
		assert!(matches!(ctx.remaining(), Ok(None)));
	}

	#[test]
	fn cancellation_wins_over_deadline() {
		let token = CancellationToken::new();
		let ctx = ValidateContext::new()
			.with_timeout(Duration::from_secs(30))
			.with_cancellation(token.clone());

		token.cancel();

		assert!(matches!(ctx.remaining(), Err(TransportError::Cancelled)));
	}

	#[tokio::test]
	async fn run_aborts_pending_futures_on_cancel() {
		let token = CancellationToken::new();
		let ctx = ValidateContext::new().with_cancellation(token.clone());

		token.cancel();

		let outcome = ctx.run(std::future::pending::<()>()).await;

		assert!(matches!(outcome, Err(TransportError::Cancelled)));
		assert_eq!(ValidateContext::new().run(async { 7 }).await.ok(), Some(7));
	}
}
