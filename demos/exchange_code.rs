//! Demonstrates exchanging a store code and then rotating the refresh token against a local
//! mock of the MYOB token endpoint.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use myob_oauth2::{auth::Credentials, config::ClientConfig, flows::TokenClient};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let exchange_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth2/v1/authorize")
				.body_includes("grant_type=authorization_code");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"refresh_token\":\"demo-refresh\",\"expires_in\":\"1200\"}",
			);
		})
		.await;
	let refresh_mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/oauth2/v1/authorize")
				.body_includes("grant_type=refresh_token&refresh_token=demo-refresh");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access-2\",\"refresh_token\":\"demo-refresh-2\",\"expires_in\":1200}",
			);
		})
		.await;
	let config = ClientConfig::builder().base_url(server.base_url()).build()?;
	let client = TokenClient::with_config(
		Credentials::new("demo-code", "demo-client", "demo-secret", "https://app.example.com/cb"),
		config,
	)?;
	let grant = client.exchange_authorization_code().await?;

	println!("Initial access token expires at {}.", grant.expires_at);

	let rotated = client.refresh_access_token(grant.refresh_token.expose()).await?;

	println!("Rotated access token: {}.", rotated.access_token.expose());

	exchange_mock.assert_async().await;
	refresh_mock.assert_async().await;

	Ok(())
}
