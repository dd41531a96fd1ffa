//! Endpoint, timeout, and client-authentication settings consumed by the token flows.
//!
//! [`ClientConfig`] replaces compiled-in endpoint constants: the defaults reproduce the MYOB
//! production endpoints, while tests and alternate deployments point the client elsewhere
//! through [`ClientConfigBuilder`]. Both serde directions go through the builder's shape, so
//! deserializing a [`ClientConfig`] runs the same validation as [`ClientConfigBuilder::build`].

/// Builder API and defaults for [`ClientConfig`].
pub mod builder;

pub use builder::*;

// self
use crate::_prelude::*;

/// Where the client places its credentials on token endpoint calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
	#[default]
	/// Form POST body parameters for `client_id`/`client_secret`.
	ClientSecretPost,
	/// HTTP Basic with `client_id`/`client_secret`.
	ClientSecretBasic,
}

/// Validated configuration shared by both token flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ClientConfigBuilder", into = "ClientConfigBuilder")]
pub struct ClientConfig {
	/// Endpoint receiving `grant_type=authorization_code` requests.
	pub token_endpoint: Url,
	/// Endpoint receiving `grant_type=refresh_token` requests.
	pub refresh_endpoint: Url,
	/// Request timeout applied to the default transport.
	pub timeout: StdDuration,
	/// Scope requested by the initial exchange; empty omits the field.
	pub scope: String,
	/// Lifetime assumed when the token endpoint omits a usable `expires_in`.
	pub default_expires_in: Duration,
	/// Client authentication placement.
	pub client_auth_method: ClientAuthMethod,
}
impl ClientConfig {
	/// Creates a builder seeded with the MYOB production defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Returns the MYOB production configuration.
	pub fn myob() -> Result<Self, ClientConfigError> {
		Self::builder().build()
	}
}
impl TryFrom<ClientConfigBuilder> for ClientConfig {
	type Error = ClientConfigError;

	fn try_from(builder: ClientConfigBuilder) -> Result<Self, Self::Error> {
		builder.build()
	}
}
