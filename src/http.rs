//! Transport wrapper used for issuer verification calls.
//!
//! [`ReqwestHttpClient`] keeps the shared reqwest handle in one place so every provider
//! sends its verification request the same way: POST, no body, per-request timeout taken
//! from the caller's deadline.

// std
use std::{ops::Deref, time::Duration};
// crates.io
use reqwest::{Response, redirect::Policy};
// self
use crate::{_prelude::*, error::ConfigError};

/// Thin wrapper around [`ReqwestClient`] shared by issuer strategies.
///
/// Verification endpoints answer directly; a redirect is treated as a non-success status
/// when the client is built with [`ReqwestHttpClient::without_redirects`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client that never follows redirects.
	pub fn without_redirects() -> Result<Self> {
		let client = ReqwestClient::builder()
			.redirect(Policy::none())
			.user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
			.build()
			.map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	/// Sends an empty-bodied POST to `url`.
	///
	/// The returned [`Response`] owns the connection; dropping it on any path releases it.
	pub(crate) async fn post(&self, url: Url, timeout: Option<Duration>) -> Result<Response> {
		let mut request = self.0.post(url);

		if let Some(timeout) = timeout {
			request = request.timeout(timeout);
		}

		request.send().await.map_err(crate::error::map_reqwest_error)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<ReqwestClient> for ReqwestHttpClient {
	fn from(client: ReqwestClient) -> Self {
		Self(client)
	}
}
