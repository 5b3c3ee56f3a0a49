//! Pluggable identity verification: one `AuthProvider` trait, a Google ID-token strategy that
//! checks credentials against the issuer's live `tokeninfo` endpoint, and a name-keyed provider
//! set so several strategies can coexist in one host.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod error;
pub mod google;
pub mod http;
pub mod obs;
pub mod provider;
pub mod registry;

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError, StatusCode};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value as JsonValue;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use tokio_util::sync::CancellationToken;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
