//! Strongly typed provider names used as registry keys.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

const NAME_MAX_LEN: usize = 64;

/// Error returned when provider name validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum NameError {
	/// The name was empty.
	#[error("Provider name cannot be empty.")]
	Empty,
	/// The name contains whitespace characters.
	#[error("Provider name contains whitespace.")]
	ContainsWhitespace,
	/// The name exceeded the allowed character count.
	#[error("Provider name exceeds {max} characters.")]
	TooLong {
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Key under which a strategy is registered in a host's provider set.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderName(String);
impl ProviderName {
	/// Creates a new name after validation.
	pub fn new(value: impl AsRef<str>) -> Result<Self, NameError> {
		let view = value.as_ref();

		validate_view(view)?;

		Ok(Self(view.to_owned()))
	}

	/// Wraps a compile-time constant name.
	///
	/// Reserved for names owned by this crate; they are covered by unit tests.
	pub(crate) fn from_static(value: &'static str) -> Self {
		debug_assert!(validate_view(value).is_ok(), "Static provider name must be valid.");

		Self(value.to_owned())
	}

	/// Borrows the name as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for ProviderName {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for ProviderName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Borrow<str> for ProviderName {
	fn borrow(&self) -> &str {
		&self.0
	}
}
impl From<ProviderName> for String {
	fn from(value: ProviderName) -> Self {
		value.0
	}
}
impl TryFrom<String> for ProviderName {
	type Error = NameError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		validate_view(&value)?;

		Ok(Self(value))
	}
}
impl Debug for ProviderName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Provider({})", self.0)
	}
}
impl Display for ProviderName {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}
impl FromStr for ProviderName {
	type Err = NameError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

fn validate_view(view: &str) -> Result<(), NameError> {
	if view.is_empty() {
		return Err(NameError::Empty);
	}
	if view.chars().any(char::is_whitespace) {
		return Err(NameError::ContainsWhitespace);
	}
	if view.chars().count() > NAME_MAX_LEN {
		return Err(NameError::TooLong { max: NAME_MAX_LEN });
	}

	Ok(())
}
