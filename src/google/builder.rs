// std
use std::net::IpAddr;
// crates.io
use url::Host;
// self
use crate::{
	_prelude::*,
	error::ConfigError,
	google::{GoogleAuth, default_endpoint},
	http::ReqwestHttpClient,
};

/// Builder for [`GoogleAuth`] verifiers.
#[derive(Debug)]
pub struct GoogleAuthBuilder {
	/// Expected audience (OAuth client identifier).
	pub client_id: String,
	/// Verification endpoint override.
	pub endpoint: Option<Url>,
	/// HTTP client override.
	pub http_client: Option<ReqwestHttpClient>,
}
impl GoogleAuthBuilder {
	/// Creates a new builder for the provided client identifier.
	pub fn new(client_id: impl Into<String>) -> Self {
		Self { client_id: client_id.into(), endpoint: None, http_client: None }
	}

	/// Overrides the verification endpoint.
	pub fn endpoint(mut self, url: Url) -> Self {
		self.endpoint = Some(url);

		self
	}

	/// Parses and overrides the verification endpoint.
	pub fn endpoint_str(self, url: &str) -> Result<Self> {
		let url = Url::parse(url).map_err(|source| ConfigError::InvalidEndpoint { source })?;

		Ok(self.endpoint(url))
	}

	/// Overrides the HTTP client.
	pub fn http_client(mut self, client: impl Into<ReqwestHttpClient>) -> Self {
		self.http_client = Some(client.into());

		self
	}

	/// Consumes the builder and validates the resulting verifier.
	pub fn build(self) -> Result<GoogleAuth> {
		if self.client_id.is_empty() {
			return Err(ConfigError::EmptyClientId.into());
		}

		let endpoint = self.endpoint.unwrap_or_else(default_endpoint);

		validate_endpoint(&endpoint)?;

		Ok(GoogleAuth {
			client_id: self.client_id,
			endpoint,
			http_client: self.http_client.unwrap_or_default(),
		})
	}
}

fn validate_endpoint(url: &Url) -> Result<(), ConfigError> {
	match url.scheme() {
		"https" => Ok(()),
		"http" if is_loopback(url) => Ok(()),
		_ => Err(ConfigError::InsecureEndpoint { url: url.to_string() }),
	}
}

fn is_loopback(url: &Url) -> bool {
	match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => IpAddr::V4(ip).is_loopback(),
		Some(Host::Ipv6(ip)) => IpAddr::V6(ip).is_loopback(),
		None => false,
	}
}
