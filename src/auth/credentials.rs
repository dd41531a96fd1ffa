//! Immutable client credentials owned by a [`TokenClient`](crate::flows::TokenClient).

// crates.io
use oauth2::{AuthorizationCode, ClientId, ClientSecret};
// self
use crate::_prelude::*;

/// Client registration plus the store/authorization code issued to the application.
///
/// Values are accepted verbatim; empty strings are permitted and forwarded as-is. The
/// authorization code and client secret are redacted from `Debug` output.
#[derive(Clone)]
pub struct Credentials {
	store_code: AuthorizationCode,
	client_id: ClientId,
	client_secret: ClientSecret,
	redirect_uri: String,
}
impl Credentials {
	/// Creates credentials from raw values.
	pub fn new(
		store_code: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Self {
		Self {
			store_code: AuthorizationCode::new(store_code.into()),
			client_id: ClientId::new(client_id.into()),
			client_secret: ClientSecret::new(client_secret.into()),
			redirect_uri: redirect_uri.into(),
		}
	}

	/// Returns the authorization code used by the initial exchange.
	pub fn store_code(&self) -> &AuthorizationCode {
		&self.store_code
	}

	/// Returns the OAuth client identifier.
	pub fn client_id(&self) -> &ClientId {
		&self.client_id
	}

	/// Returns the OAuth client secret. Callers must avoid logging it.
	pub fn client_secret(&self) -> &ClientSecret {
		&self.client_secret
	}

	/// Returns the redirect URI registered for the client.
	pub fn redirect_uri(&self) -> &str {
		&self.redirect_uri
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("store_code", &"<redacted>")
			.field("client_id", &self.client_id.as_str())
			.field("client_secret", &"<redacted>")
			.field("redirect_uri", &self.redirect_uri)
			.finish()
	}
}
