//! Refresh-token exchange.

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
	/// Performs the `refresh_token` grant against the configured refresh endpoint.
	///
	/// The form body carries `grant_type`, `refresh_token`, `redirect_uri`, `client_id`, and
	/// `client_secret`; no scope is sent. The returned grant usually carries a rotated refresh
	/// token that replaces `refresh_token`.
	pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenGrant> {
		let request = TokenRequest::refresh_token(&self.credentials, refresh_token);

		common::exchange(
			self,
			FlowKind::Refresh,
			"refresh_access_token",
			request,
			&self.config.refresh_endpoint,
		)
		.await
	}
}
