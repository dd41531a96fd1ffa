//! Authorization-code exchange.
//!
//! [`TokenClient::exchange_authorization_code`] trades the store code held in the client's
//! [`Credentials`](crate::auth::Credentials) for the first token pair. MYOB issues the code
//! once, so callers should persist the returned grant and use
//! [`TokenClient::refresh_access_token`] afterwards.

// self
use crate::{
	_prelude::*,
	auth::TokenGrant,
	flows::{TokenClient, common},
	http::TokenHttpClient,
	oauth::TokenRequest,
	obs::FlowKind,
};

impl<C> TokenClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Performs the `authorization_code` grant against the configured token endpoint.
	///
	/// The form body carries `grant_type`, `code`, `redirect_uri`, `client_id`,
	/// `client_secret`, and the configured `scope`.
	pub async fn exchange_authorization_code(&self) -> Result<TokenGrant> {
		let request = TokenRequest::authorization_code(&self.credentials, &self.config.scope);

		common::exchange(
			self,
			FlowKind::AuthorizationCode,
			"exchange_authorization_code",
			request,
			&self.config.token_endpoint,
		)
		.await
	}
}
