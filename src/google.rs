//! Google ID-token strategy backed by the issuer's live `tokeninfo` endpoint.
//!
//! [`GoogleAuth`] pulls `id_token` out of the argument bag, POSTs it to the verification
//! endpoint, and accepts the credential only when the issuer answers `200` with claims whose
//! `aud` equals the configured client identifier. The endpoint does not scope validity to
//! a caller, so the audience comparison is what stops tokens minted for other applications.
//!
//! Three outcomes are kept apart:
//!
//! - `Ok(Validation::Validated(_))`: issuer confirmed the token for this client.
//! - `Ok(Validation::NotValidated)`: token missing or malformed, issuer said no, or the
//!   audience differs. No request is sent in the first two cases.
//! - `Err(_)`: the request could not be built or completed (network, deadline, cancellation)
//!   or a `200` body did not decode.

mod builder;
mod claims;

pub use builder::*;
pub use claims::*;

// std
use std::sync::LazyLock;
// self
use crate::{
	_prelude::*,
	http::ReqwestHttpClient,
	obs::{self, RejectReason, ValidateOutcome, ValidateSpan},
	provider::{
		ArgumentBag, AuthProvider, ID_TOKEN_KEY, IdToken, ProviderName, ValidateContext,
		ValidateFuture, Validation,
	},
	registry::AuthOption,
};

/// Name under which [`GoogleAuth`] registers itself.
pub const NAME: &str = "google";
/// Google's ID-token verification endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://oauth2.googleapis.com/tokeninfo";

static DEFAULT_ENDPOINT_URL: LazyLock<Url> = LazyLock::new(|| {
	Url::parse(DEFAULT_ENDPOINT).expect("Default tokeninfo endpoint must be a valid URL.")
});

/// Verifies Google-issued ID tokens for a single OAuth client.
#[derive(Clone)]
pub struct GoogleAuth {
	client_id: String,
	endpoint: Url,
	http_client: ReqwestHttpClient,
}
impl GoogleAuth {
	/// Creates a verifier for `client_id` against the default endpoint.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self {
			client_id: client_id.into(),
			endpoint: default_endpoint(),
			http_client: ReqwestHttpClient::default(),
		}
	}

	/// Creates a new builder for the provided client identifier.
	pub fn builder(client_id: impl Into<String>) -> GoogleAuthBuilder {
		GoogleAuthBuilder::new(client_id)
	}

	/// Expected audience.
	pub fn client_id(&self) -> &str {
		&self.client_id
	}

	/// Verification endpoint.
	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	async fn verify(&self, ctx: &ValidateContext, args: &ArgumentBag) -> Result<Validation> {
		let Some(token) = IdToken::from_args(args) else {
			let reason = if args.contains_key(ID_TOKEN_KEY) {
				RejectReason::MalformedToken
			} else {
				RejectReason::MissingToken
			};

			return Ok(reject(reason));
		};
		let timeout = ctx.remaining()?;
		let request = self.http_client.post(self.verification_url(&token), timeout);
		let response = ctx.run(request).await??;
		let status = response.status();

		if status != StatusCode::OK {
			return Ok(reject(RejectReason::IssuerStatus));
		}

		let body = ctx.run(response.bytes()).await?.map_err(crate::error::map_reqwest_error)?;
		let claims = IssuerClaims::decode(&body, status.as_u16())?;

		if !claims.audience_matches(&self.client_id) {
			return Ok(reject(RejectReason::AudienceMismatch));
		}

		match Validation::from_subject(claims.sub) {
			Validation::NotValidated => Ok(reject(RejectReason::EmptySubject)),
			validated => Ok(validated),
		}
	}

	fn verification_url(&self, token: &IdToken) -> Url {
		let mut url = self.endpoint.clone();

		url.query_pairs_mut().append_pair(ID_TOKEN_KEY, token.expose());

		url
	}
}
impl AuthProvider for GoogleAuth {
	fn validate<'a>(
		&'a self,
		ctx: &'a ValidateContext,
		args: &'a ArgumentBag,
	) -> ValidateFuture<'a> {
		Box::pin(async move {
			let span = ValidateSpan::new(NAME);

			obs::record_validate_outcome(NAME, ValidateOutcome::Attempt);

			let result = span.instrument(self.verify(ctx, args)).await;

			match &result {
				Ok(Validation::Validated(_)) =>
					obs::record_validate_outcome(NAME, ValidateOutcome::Validated),
				Ok(Validation::NotValidated) =>
					obs::record_validate_outcome(NAME, ValidateOutcome::Rejected),
				Err(e) => {
					obs::trace_failure(NAME, e);
					obs::record_validate_outcome(NAME, ValidateOutcome::Failure);
				},
			}

			result
		})
	}
}
impl Debug for GoogleAuth {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GoogleAuth")
			.field("client_id", &self.client_id)
			.field("endpoint", &self.endpoint.as_str())
			.finish()
	}
}

/// Builds a type-erased Google verifier for `client_id`.
pub fn new_auth_provider(client_id: impl Into<String>) -> Arc<dyn AuthProvider> {
	Arc::new(GoogleAuth::new(client_id))
}

/// Builds an option registering a Google verifier under [`NAME`].
pub fn new(client_id: impl Into<String>) -> AuthOption {
	AuthOption::with_auth_provider(ProviderName::from_static(NAME), new_auth_provider(client_id))
}

pub(crate) fn default_endpoint() -> Url {
	DEFAULT_ENDPOINT_URL.clone()
}

fn reject(reason: RejectReason) -> Validation {
	obs::trace_rejection(NAME, reason);
	obs::record_rejection(NAME, reason);

	Validation::NotValidated
}

#[cfg(test)]
mod tests {
	// crates.io
	use tokio_util::sync::CancellationToken;
	// self
	use super::*;

	fn bag(value: JsonValue) -> ArgumentBag {
		HashMap::from_iter([(ID_TOKEN_KEY.to_owned(), value)])
	}

	// Nothing listens on the discard port, so a dispatched request would fail.
	fn offline_verifier() -> GoogleAuth {
		GoogleAuth::builder("client-42")
			.endpoint_str("http://127.0.0.1:9/tokeninfo")
			.expect("Loopback endpoint should parse.")
			.build()
			.expect("Loopback verifier should build.")
	}

	#[test]
	fn verification_url_encodes_the_token() {
		let verifier = GoogleAuth::new("client-42");
		let url = verifier.verification_url(&IdToken::new("a+b/c=="));

		assert_eq!(
			url.as_str(),
			"https://oauth2.googleapis.com/tokeninfo?id_token=a%2Bb%2Fc%3D%3D"
		);
	}

	#[tokio::test]
	async fn missing_or_non_string_tokens_skip_the_network() {
		let verifier = offline_verifier();
		let ctx = ValidateContext::new();

		for args in [ArgumentBag::new(), bag(serde_json::json!(123)), bag(JsonValue::Null)] {
			let validation = verifier
				.validate(&ctx, &args)
				.await
				.expect("Absent tokens must not surface as errors.");

			assert_eq!(validation, Validation::NotValidated);
		}
	}

	#[tokio::test]
	async fn cancelled_context_fails_before_dispatch() {
		let verifier = offline_verifier();
		let token = CancellationToken::new();
		let ctx = ValidateContext::new().with_cancellation(token.clone());

		token.cancel();

		let err = verifier
			.validate(&ctx, &bag(serde_json::json!("abc")))
			.await
			.expect_err("Cancelled calls must return an error.");

		assert!(matches!(err, Error::Transport(crate::error::TransportError::Cancelled)));
	}

	#[test]
	fn factories_register_under_the_fixed_name() {
		let option = new("client-42");

		assert_eq!(option.name().as_str(), NAME);
		assert_eq!(GoogleAuth::new("client-42").client_id(), "client-42");
		assert!(format!("{:?}", GoogleAuth::new("client-42")).contains("client-42"));
	}
}
