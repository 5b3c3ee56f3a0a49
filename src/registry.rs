//! Name-keyed provider set and the options that populate it.
//!
//! Hosts that already own a registry only need [`AuthOption::name`] and
//! [`AuthOption::provider`]; [`AuthProviders`] is a minimal in-crate set for everything else.

// self
use crate::{
	_prelude::*,
	provider::{ArgumentBag, AuthProvider, ProviderName, Subject, ValidateContext, Validation},
};

/// Registers one provider instance under one name.
#[derive(Clone)]
pub struct AuthOption {
	name: ProviderName,
	provider: Arc<dyn AuthProvider>,
}
impl AuthOption {
	/// Pairs a provider instance with its registration name.
	pub fn with_auth_provider(name: ProviderName, provider: Arc<dyn AuthProvider>) -> Self {
		Self { name, provider }
	}

	/// Registration name.
	pub fn name(&self) -> &ProviderName {
		&self.name
	}

	/// Provider instance.
	pub fn provider(&self) -> &Arc<dyn AuthProvider> {
		&self.provider
	}

	/// Splits the option into its parts.
	pub fn into_parts(self) -> (ProviderName, Arc<dyn AuthProvider>) {
		(self.name, self.provider)
	}
}
impl Debug for AuthOption {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthOption").field("name", &self.name).finish_non_exhaustive()
	}
}

/// Set of providers addressed by name.
///
/// Iteration and fallback follow name order, so composition is deterministic.
#[derive(Clone, Default)]
pub struct AuthProviders {
	providers: BTreeMap<ProviderName, Arc<dyn AuthProvider>>,
}
impl AuthProviders {
	/// Builds a set from options; later options replace earlier ones with the same name.
	pub fn new<I>(options: I) -> Self
	where
		I: IntoIterator<Item = AuthOption>,
	{
		let mut set = Self::default();

		for option in options {
			set.register(option);
		}

		set
	}

	/// Adds or replaces a provider, returning the replaced instance.
	pub fn register(&mut self, option: AuthOption) -> Option<Arc<dyn AuthProvider>> {
		let (name, provider) = option.into_parts();

		self.providers.insert(name, provider)
	}

	/// Looks up a provider by name.
	pub fn get(&self, name: &str) -> Option<&Arc<dyn AuthProvider>> {
		self.providers.get(name)
	}

	/// Registered names in iteration order.
	pub fn names(&self) -> impl Iterator<Item = &ProviderName> {
		self.providers.keys()
	}

	/// Number of registered providers.
	pub fn len(&self) -> usize {
		self.providers.len()
	}

	/// Returns true when no provider is registered.
	pub fn is_empty(&self) -> bool {
		self.providers.is_empty()
	}

	/// Validates with the provider registered under `name`.
	pub async fn validate(
		&self,
		name: &str,
		ctx: &ValidateContext,
		args: &ArgumentBag,
	) -> Result<Validation> {
		let provider =
			self.get(name).ok_or_else(|| Error::UnknownProvider { name: name.to_owned() })?;

		provider.validate(ctx, args).await
	}

	/// Tries every provider in name order and returns the first accepted subject.
	///
	/// `NotValidated` moves on to the next provider; an error stops the walk and is returned
	/// as-is so infrastructure faults are never mistaken for a rejection.
	pub async fn validate_any(
		&self,
		ctx: &ValidateContext,
		args: &ArgumentBag,
	) -> Result<Option<(ProviderName, Subject)>> {
		for (name, provider) in &self.providers {
			if let Validation::Validated(subject) = provider.validate(ctx, args).await? {
				return Ok(Some((name.clone(), subject)));
			}
		}

		Ok(None)
	}
}
impl Extend<AuthOption> for AuthProviders {
	fn extend<I>(&mut self, options: I)
	where
		I: IntoIterator<Item = AuthOption>,
	{
		for option in options {
			self.register(option);
		}
	}
}
impl FromIterator<AuthOption> for AuthProviders {
	fn from_iter<I>(options: I) -> Self
	where
		I: IntoIterator<Item = AuthOption>,
	{
		Self::new(options)
	}
}
impl Debug for AuthProviders {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_set().entries(self.providers.keys()).finish()
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::sync::atomic::{AtomicUsize, Ordering};
	// self
	use super::*;
	use crate::{error::TransportError, provider::ValidateFuture};

	struct FixedProvider {
		subject: Option<&'static str>,
		calls: AtomicUsize,
	}
	impl FixedProvider {
		fn new(subject: Option<&'static str>) -> Arc<Self> {
			Arc::new(Self { subject, calls: AtomicUsize::new(0) })
		}
	}
	impl AuthProvider for FixedProvider {
		fn validate<'a>(
			&'a self,
			_ctx: &'a ValidateContext,
			_args: &'a ArgumentBag,
		) -> ValidateFuture<'a> {
			self.calls.fetch_add(1, Ordering::SeqCst);

			let validation =
				self.subject.map_or(Validation::NotValidated, Validation::from_subject);

			Box::pin(async move { Ok(validation) })
		}
	}

	struct FailingProvider;
	impl AuthProvider for FailingProvider {
		fn validate<'a>(
			&'a self,
			_ctx: &'a ValidateContext,
			_args: &'a ArgumentBag,
		) -> ValidateFuture<'a> {
			Box::pin(async { Err(TransportError::Cancelled.into()) })
		}
	}

	fn option(name: &str, provider: Arc<dyn AuthProvider>) -> AuthOption {
		let name = ProviderName::new(name).expect("Test provider name should be valid.");

		AuthOption::with_auth_provider(name, provider)
	}

	#[tokio::test]
	async fn validate_routes_by_name() {
		let providers = AuthProviders::new([
			option("alpha", FixedProvider::new(None)),
			option("beta", FixedProvider::new(Some("u-beta"))),
		]);
		let ctx = ValidateContext::new();
		let args = ArgumentBag::new();
		let validation =
			providers.validate("beta", &ctx, &args).await.expect("Known provider should answer.");

		assert_eq!(validation.id(), "u-beta");

		let err = providers
			.validate("gamma", &ctx, &args)
			.await
			.expect_err("Unknown provider must be reported.");

		assert!(matches!(err, Error::UnknownProvider { name } if name == "gamma"));
	}

	#[tokio::test]
	async fn validate_any_falls_through_rejections_in_name_order() {
		let first = FixedProvider::new(None);
		let second = FixedProvider::new(Some("u-second"));
		let third = FixedProvider::new(Some("u-third"));
		let providers: AuthProviders = [
			option("c-third", third.clone()),
			option("a-first", first.clone()),
			option("b-second", second.clone()),
		]
		.into_iter()
		.collect();
		let (name, subject) = providers
			.validate_any(&ValidateContext::new(), &ArgumentBag::new())
			.await
			.expect("Providers should not fail.")
			.expect("Second provider should validate.");

		assert_eq!(name.as_str(), "b-second");
		assert_eq!(subject.as_str(), "u-second");
		assert_eq!(first.calls.load(Ordering::SeqCst), 1);
		assert_eq!(second.calls.load(Ordering::SeqCst), 1);
		assert_eq!(third.calls.load(Ordering::SeqCst), 0);
	}

	#[tokio::test]
	async fn validate_any_stops_on_errors() {
		let later = FixedProvider::new(Some("u-later"));
		let providers = AuthProviders::new([
			option("a-broken", Arc::new(FailingProvider)),
			option("b-later", later.clone()),
		]);
		let err = providers
			.validate_any(&ValidateContext::new(), &ArgumentBag::new())
			.await
			.expect_err("Infrastructure failures must propagate.");

		assert!(err.is_transport());
		assert_eq!(later.calls.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn register_replaces_same_name() {
		let mut providers = AuthProviders::default();

		assert!(providers.register(option("google", FixedProvider::new(None))).is_none());
		assert!(providers.register(option("google", FixedProvider::new(Some("u")))).is_some());
		assert_eq!(providers.len(), 1);
		assert_eq!(format!("{providers:?}"), "{Provider(google)}");

		providers.extend([crate::google::new("client-42")]);

		assert_eq!(providers.len(), 1);
		assert!(providers.get("google").is_some());
		assert!(!providers.is_empty());
	}
}
