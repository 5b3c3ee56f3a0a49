//! Redacted wrapper for bearer credentials pulled out of an argument bag.

// self
use crate::_prelude::*;

/// Argument-bag key under which callers pass an ID token.
pub const ID_TOKEN_KEY: &str = "id_token";

/// Opaque ID token kept out of logs.
#[derive(Clone, PartialEq, Eq)]
pub struct IdToken(String);
impl IdToken {
	/// Wraps a raw token string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Extracts the token from `args[ID_TOKEN_KEY]`.
	///
	/// Returns `None` when the key is absent or its value is not a JSON string; both cases
	/// mean "nothing to check" rather than an error.
	pub fn from_args(args: &HashMap<String, JsonValue>) -> Option<Self> {
		match args.get(ID_TOKEN_KEY)? {
			JsonValue::String(raw) => Some(Self::new(raw.as_str())),
			_ => None,
		}
	}

	/// Returns the inner token value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl Debug for IdToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("IdToken").field(&"<redacted>").finish()
	}
}
impl Display for IdToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_formatters_redact() {
		let token = IdToken::new("eyJhbGciOi.secret");

		assert_eq!(format!("{token:?}"), "IdToken(\"<redacted>\")");
		assert_eq!(format!("{token}"), "<redacted>");
		assert_eq!(token.expose(), "eyJhbGciOi.secret");
	}

	#[test]
	fn extraction_requires_a_string_value() {
		let mut args = HashMap::new();

		assert!(IdToken::from_args(&args).is_none());

		args.insert(ID_TOKEN_KEY.to_owned(), serde_json::json!(42));

		assert!(IdToken::from_args(&args).is_none());

		args.insert(ID_TOKEN_KEY.to_owned(), serde_json::json!(["abc"]));

		assert!(IdToken::from_args(&args).is_none());

		args.insert(ID_TOKEN_KEY.to_owned(), serde_json::json!("abc"));

		assert_eq!(IdToken::from_args(&args).map(|t| t.expose().to_owned()), Some("abc".into()));
	}
}
