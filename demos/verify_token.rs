//! Verifies a Google ID token against the live `tokeninfo` endpoint.
//!
//! ```sh
//! cargo run --example verify_token -- <client-id> <id-token>
//! ```

// std
use std::{collections::HashMap, time::Duration};
// crates.io
use color_eyre::{Result, eyre::eyre};
use serde_json::Value;
// self
use auth_provider::{
	google,
	provider::{ValidateContext, Validation},
	registry::AuthProviders,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let mut args = std::env::args().skip(1);
	let client_id = args.next().ok_or_else(|| eyre!("Missing <client-id> argument."))?;
	let id_token = args.next().ok_or_else(|| eyre!("Missing <id-token> argument."))?;
	let providers = AuthProviders::new([google::new(client_id)]);
	let ctx = ValidateContext::new().with_timeout(Duration::from_secs(10));
	let bag = HashMap::from_iter([("id_token".to_owned(), Value::String(id_token))]);

	match providers.validate(google::NAME, &ctx, &bag).await? {
		Validation::Validated(subject) => println!("Validated subject: {subject}."),
		Validation::NotValidated => println!("Token was not validated."),
	}

	Ok(())
}
