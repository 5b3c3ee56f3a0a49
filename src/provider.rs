//! The pluggable `AuthProvider` capability shared by every issuer strategy.
//!
//! `context` carries the caller's deadline + cancellation signal, `name` the validated
//! registration key, `token` the redacted credential wrapper, and `validation` the tagged
//! outcome returned by [`AuthProvider::validate`].

pub mod context;
pub mod name;
pub mod token;
pub mod validation;

pub use context::*;
pub use name::*;
pub use token::*;
pub use validation::*;

// self
use crate::_prelude::*;

/// Argument bag handed to providers; each strategy reads only the keys it agreed on.
pub type ArgumentBag = HashMap<String, JsonValue>;

/// Boxed future returned by [`AuthProvider::validate`].
pub type ValidateFuture<'a> = Pin<Box<dyn Future<Output = Result<Validation>> + 'a + Send>>;

/// Strategy contract implemented once per identity issuer.
///
/// Implementors must be `Send + Sync` so a host can share one instance across tasks.
/// Returning `Ok(Validation::NotValidated)` means "this credential is not acceptable
/// here" and is routine; returning `Err` means the provider could not decide (network,
/// cancellation, protocol mismatch) and the caller may alert or retry.
pub trait AuthProvider
where
	Self: Send + Sync,
{
	/// Validates the argument bag against this provider's rules.
	fn validate<'a>(&'a self, ctx: &'a ValidateContext, args: &'a ArgumentBag)
	-> ValidateFuture<'a>;
}
