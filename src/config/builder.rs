// self
use crate::{
	_prelude::*,
	config::{ClientAuthMethod, ClientConfig},
};

/// MYOB secure host serving the OAuth endpoints.
pub const DEFAULT_BASE_URL: &str = "https://secure.myob.com";
/// Path of the MYOB token endpoint; refresh requests use the same path.
pub const DEFAULT_TOKEN_PATH: &str = "oauth2/v1/authorize";
/// Scope requested by the initial authorization-code exchange.
pub const DEFAULT_SCOPE: &str = "CompanyFile";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: StdDuration = StdDuration::from_secs(30);
/// Lifetime of a MYOB access token when the response omits `expires_in`.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::seconds(1200);

/// Errors raised while constructing or validating a [`ClientConfig`].
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum ClientConfigError {
	/// Base URL cannot be parsed.
	#[error("Base URL `{url}` is invalid.")]
	InvalidBaseUrl {
		/// Base URL that failed to parse.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL must use HTTP(S), accept a path, and carry no query or fragment.
	#[error("Base URL `{url}` must be an http or https URL without a query or fragment.")]
	UnsupportedBaseUrl {
		/// Base URL that failed validation.
		url: String,
	},
	/// Timeout must be non-zero.
	#[error("Request timeout must be greater than zero.")]
	ZeroTimeout,
	/// Fallback expiry must be positive.
	#[error("Default expires_in must be positive.")]
	NonPositiveExpiry,
}

/// Builder for [`ClientConfig`] values, seeded with the MYOB production defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfigBuilder {
	/// Scheme + host (and optional port) of the OAuth server.
	pub base_url: String,
	/// Path used for authorization-code exchanges; replaces any path on `base_url`.
	pub token_path: String,
	/// Path used for refresh-token exchanges; replaces any path on `base_url`.
	pub refresh_path: String,
	/// Request timeout applied to the default transport.
	pub timeout: StdDuration,
	/// Scope requested by the initial exchange.
	pub scope: String,
	/// Lifetime assumed when the response omits a usable `expires_in`.
	pub default_expires_in: Duration,
	/// Client authentication placement.
	pub client_auth_method: ClientAuthMethod,
}
impl ClientConfigBuilder {
	/// Sets the OAuth server base URL.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = url.into();

		self
	}

	/// Sets the authorization-code exchange path.
	pub fn token_path(mut self, path: impl Into<String>) -> Self {
		self.token_path = path.into();

		self
	}

	/// Sets the refresh-token exchange path.
	pub fn refresh_path(mut self, path: impl Into<String>) -> Self {
		self.refresh_path = path.into();

		self
	}

	/// Overrides the request timeout.
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = timeout;

		self
	}

	/// Overrides the scope requested by the initial exchange.
	pub fn scope(mut self, scope: impl Into<String>) -> Self {
		self.scope = scope.into();

		self
	}

	/// Overrides the fallback token lifetime.
	pub fn default_expires_in(mut self, lifetime: Duration) -> Self {
		self.default_expires_in = lifetime;

		self
	}

	/// Overrides where client credentials are sent.
	pub fn client_auth_method(mut self, method: ClientAuthMethod) -> Self {
		self.client_auth_method = method;

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
		let base = parse_base_url(&self.base_url)?;

		if self.timeout.is_zero() {
			return Err(ClientConfigError::ZeroTimeout);
		}
		if !self.default_expires_in.is_positive() {
			return Err(ClientConfigError::NonPositiveExpiry);
		}

		Ok(ClientConfig {
			token_endpoint: endpoint(&base, &self.token_path),
			refresh_endpoint: endpoint(&base, &self.refresh_path),
			timeout: self.timeout,
			scope: self.scope,
			default_expires_in: self.default_expires_in,
			client_auth_method: self.client_auth_method,
		})
	}
}
impl Default for ClientConfigBuilder {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.into(),
			token_path: DEFAULT_TOKEN_PATH.into(),
			refresh_path: DEFAULT_TOKEN_PATH.into(),
			timeout: DEFAULT_TIMEOUT,
			scope: DEFAULT_SCOPE.into(),
			default_expires_in: DEFAULT_EXPIRES_IN,
			client_auth_method: ClientAuthMethod::default(),
		}
	}
}
impl From<ClientConfig> for ClientConfigBuilder {
	fn from(config: ClientConfig) -> Self {
		Self {
			base_url: config.token_endpoint.origin().ascii_serialization(),
			token_path: config.token_endpoint.path().to_owned(),
			refresh_path: config.refresh_endpoint.path().to_owned(),
			timeout: config.timeout,
			scope: config.scope,
			default_expires_in: config.default_expires_in,
			client_auth_method: config.client_auth_method,
		}
	}
}

fn parse_base_url(raw: &str) -> Result<Url, ClientConfigError> {
	let url = Url::parse(raw)
		.map_err(|source| ClientConfigError::InvalidBaseUrl { url: raw.to_owned(), source })?;

	if !matches!(url.scheme(), "http" | "https")
		|| url.cannot_be_a_base()
		|| url.query().is_some()
		|| url.fragment().is_some()
	{
		return Err(ClientConfigError::UnsupportedBaseUrl { url: raw.to_owned() });
	}

	Ok(url)
}

fn endpoint(base: &Url, path: &str) -> Url {
	let mut url = base.clone();

	url.set_path(path);

	url
}
