//! Token flows against the configured MYOB endpoints.

pub mod auth_code;
pub mod refresh;

mod common;

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	config::ClientConfig,
	http::TokenHttpClient,
};
#[cfg(feature = "reqwest")] use crate::{error::ConfigError, http::ReqwestHttpClient};

#[cfg(feature = "reqwest")]
/// Token client specialized for the crate's default reqwest transport.
pub type ReqwestTokenClient = TokenClient<ReqwestHttpClient>;

/// Performs authorization-code and refresh-token exchanges for one registered client.
///
/// The client owns its [`Credentials`] and [`ClientConfig`] immutably and keeps no token state,
/// so a single instance can serve concurrent calls. Each call issues exactly one POST and
/// either returns a [`TokenGrant`](crate::auth::TokenGrant) or an [`Error`]; failures are never
/// retried.
pub struct TokenClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// HTTP client wrapper used for every outbound token request.
	pub http_client: Arc<C>,
	/// Endpoint, scope, and expiry settings.
	pub config: ClientConfig,
	credentials: Credentials,
}
impl<C> TokenClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	/// Creates a client that reuses a caller-provided transport.
	///
	/// The transport is used as-is; `config.timeout` is only applied by the constructors that
	/// build their own reqwest client.
	pub fn with_http_client(
		credentials: Credentials,
		config: ClientConfig,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), config, credentials }
	}

	/// Returns the credentials used by every exchange.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}
}
#[cfg(feature = "reqwest")]
impl TokenClient<ReqwestHttpClient> {
	/// Creates a client for the MYOB production endpoints.
	///
	/// No validation is applied to the credential values. The default 30-second timeout is
	/// enforced by the underlying reqwest client.
	pub fn new(
		store_code: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
		redirect_uri: impl Into<String>,
	) -> Result<Self> {
		let config = ClientConfig::myob().map_err(ConfigError::from)?;

		Self::with_config(
			Credentials::new(store_code, client_id, client_secret, redirect_uri),
			config,
		)
	}

	/// Creates a client for custom endpoints, building a reqwest transport that honors
	/// `config.timeout`.
	pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::with_timeout(config.timeout)?;

		Ok(Self::with_http_client(credentials, config, http_client))
	}
}
impl<C> Clone for TokenClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			config: self.config.clone(),
			credentials: self.credentials.clone(),
		}
	}
}
impl<C> Debug for TokenClient<C>
where
	C: ?Sized + TokenHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenClient")
			.field("config", &self.config)
			.field("credentials", &self.credentials)
			.finish()
	}
}
