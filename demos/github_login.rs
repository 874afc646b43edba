//! Walks through the "login with GitHub" round trip: print the authorize redirect, then trade the
//! code GitHub sends to the callback for the user's short profile.
//!
//! ```sh
//! GITHUB_CLIENT_ID=... GITHUB_CLIENT_SECRET=... cargo run --example github_login -- <code>
//! ```

// std
use std::{env, time::Duration};
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use identity_broker::{flows::ReqwestIdentityBroker, http::ReqwestHttpClient, reqwest::Client};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let client_id = env::var("GITHUB_CLIENT_ID")?;
	let client_secret = env::var("GITHUB_CLIENT_SECRET")?;
	// Timeouts and pooling belong to the shared client, not the broker.
	let client = Client::builder()
		.user_agent(ReqwestHttpClient::USER_AGENT)
		.timeout(Duration::from_secs(10))
		.build()?;
	let broker = ReqwestIdentityBroker::new(
		ReqwestHttpClient::with_client(client),
		client_id,
		client_secret,
		"http://localhost:8080/oauth/callback",
	);

	println!("Send your user to {}.", broker.login_url());

	let Some(code) = env::args().nth(1) else {
		println!("Re-run with the `code` query parameter GitHub appended to the callback.");

		return Ok(());
	};
	let identity = broker
		.exchange_code(&code)
		.await
		.map_err(|e| eyre!("GitHub login failed: {e}"))?;

	println!("Signed in as {:?} (id {}).", identity.display_name(), identity.id);

	Ok(())
}
