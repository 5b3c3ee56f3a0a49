// crates.io
use serde::Deserializer;
// self
use crate::{_prelude::*, error::DecodeError};

/// Claims returned by the issuer's `tokeninfo` endpoint.
///
/// `sub` and `aud` default to empty strings when absent or `null`; an empty audience never matches and
/// an empty subject is never validated, so a sparse body is rejected rather than treated as
/// a protocol fault.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct IssuerClaims {
	/// Subject identifier of the end user.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub sub: String,
	/// Client identifier the token was minted for.
	#[serde(default, deserialize_with = "null_as_empty")]
	pub aud: String,
	/// Issuer URL or host, when present.
	#[serde(default)]
	pub iss: Option<String>,
	/// End-user email, when the token carries the `email` scope.
	#[serde(default)]
	pub email: Option<String>,
}
impl IssuerClaims {
	/// Decodes a success body, keeping the failing JSON path for diagnostics.
	pub fn decode(body: &[u8], status: u16) -> Result<Self, DecodeError> {
		let mut de = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut de)
			.map_err(|source| DecodeError::Claims { source, status })
	}

	/// Exact comparison against the configured client identifier.
	pub fn audience_matches(&self, client_id: &str) -> bool {
		!self.aud.is_empty() && self.aud == client_id
	}
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
