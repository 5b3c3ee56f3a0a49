//! Tagged validation outcome and the non-empty subject it carries.

// std
use std::ops::Deref;
// self
use crate::_prelude::*;

/// Issuer-assigned identifier of the authenticated end user. Never empty.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "String")]
pub struct Subject(String);
impl Subject {
	/// Wraps a subject claim, returning `None` for an empty string.
	pub fn new(value: impl Into<String>) -> Option<Self> {
		let value = value.into();

		if value.is_empty() { None } else { Some(Self(value)) }
	}

	/// Borrows the identifier.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl Deref for Subject {
	type Target = str;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl AsRef<str> for Subject {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl From<Subject> for String {
	fn from(value: Subject) -> Self {
		value.0
	}
}
impl Debug for Subject {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Subject({})", self.0)
	}
}
impl Display for Subject {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(&self.0)
	}
}

/// Verdict returned by [`AuthProvider::validate`](crate::provider::AuthProvider::validate).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Validation {
	/// Credential accepted; carries the subject identifier.
	Validated(Subject),
	/// Credential missing, malformed, rejected by the issuer, or minted for another audience.
	#[default]
	NotValidated,
}
impl Validation {
	/// Builds a verdict from a raw subject claim; an empty claim is not validated.
	pub fn from_subject(subject: impl Into<String>) -> Self {
		Subject::new(subject).map_or(Self::NotValidated, Self::Validated)
	}

	/// Returns true when the credential was accepted.
	pub fn is_validated(&self) -> bool {
		matches!(self, Self::Validated(_))
	}

	/// Subject identifier, or an empty string when not validated.
	pub fn id(&self) -> &str {
		match self {
			Self::Validated(subject) => subject.as_str(),
			Self::NotValidated => "",
		}
	}

	/// Subject identifier, when validated.
	pub fn subject(&self) -> Option<&Subject> {
		match self {
			Self::Validated(subject) => Some(subject),
			Self::NotValidated => None,
		}
	}

	/// Consumes the verdict and returns the subject, when validated.
	pub fn into_subject(self) -> Option<Subject> {
		match self {
			Self::Validated(subject) => Some(subject),
			Self::NotValidated => None,
		}
	}
}
