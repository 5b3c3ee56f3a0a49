//! Provider-level error types separating infrastructure faults from credential rejection.
//!
//! A rejected credential is never an [`Error`]; it is reported as
//! [`Validation::NotValidated`](crate::provider::Validation::NotValidated). Everything in
//! this module signals that the verifier could not reach a verdict at all.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, cancellation, deadline).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Issuer answered with a success status but an unexpected body.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// No provider is registered under the requested name.
	#[error("No auth provider is registered under `{name}`.")]
	UnknownProvider {
		/// Requested provider name.
		name: String,
	},
}
impl Error {
	/// Returns true when the failure came from the network layer and a retry may succeed.
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Transport(_))
	}
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Verification request could not be built.
	#[error("Verification request could not be built.")]
	HttpRequest {
		/// Underlying request builder failure.
		#[source]
		source: BoxError,
	},
	/// Verification endpoint must use HTTPS (plain HTTP is tolerated for loopback hosts).
	#[error("The verification endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Verification endpoint cannot be parsed.
	#[error("Verification endpoint is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Expected audience was empty.
	#[error("Client identifier cannot be empty.")]
	EmptyClientId,
	/// Provider name failed validation.
	#[error(transparent)]
	InvalidProviderName(#[from] crate::provider::NameError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Wraps a request builder failure inside [`ConfigError`].
	pub fn http_request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpRequest { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO, caller-driven aborts).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the verification endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The caller's deadline elapsed before the issuer answered.
	#[error("Deadline elapsed while calling the verification endpoint.")]
	DeadlineExceeded,
	/// The caller cancelled the validation while the request was in flight.
	#[error("Validation was cancelled.")]
	Cancelled,
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

/// Protocol mismatches detected while decoding a success response.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Issuer returned JSON that does not match the claims shape.
	#[error("Verification endpoint returned malformed claims.")]
	Claims {
		/// Structured parsing failure, including the offending path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}

/// Classifies a reqwest failure into the crate taxonomy.
pub(crate) fn map_reqwest_error(err: ReqwestError) -> Error {
	if err.is_builder() {
		return ConfigError::http_request(err).into();
	}
	if err.is_timeout() {
		return TransportError::DeadlineExceeded.into();
	}

	TransportError::network(err).into()
}
