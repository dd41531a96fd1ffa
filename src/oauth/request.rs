//! Outbound token requests.
//!
//! [`TokenRequest`] renders one of the two supported grants into an [`HttpRequest`]. Form
//! fields are emitted in a fixed order (`grant_type`, the grant secret, `redirect_uri`,
//! `client_id`, `client_secret`, `scope`) so the body is reproducible byte-for-byte.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use oauth2::{
	HttpRequest,
	http::{
		HeaderValue, Method, Request,
		header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
	},
};
use url::form_urlencoded::{self, Serializer};
// self
use crate::{_prelude::*, auth::Credentials, config::ClientAuthMethod, error::ConfigError};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// OAuth 2.0 grant types issued by the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
	/// Authorization Code grant.
	AuthorizationCode,
	/// Refresh Token grant.
	RefreshToken,
}
impl GrantType {
	/// Returns the RFC 6749 identifier for the grant type.
	pub fn as_str(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "authorization_code",
			GrantType::RefreshToken => "refresh_token",
		}
	}

	/// Form field carrying the grant's secret.
	pub fn secret_field(self) -> &'static str {
		match self {
			GrantType::AuthorizationCode => "code",
			GrantType::RefreshToken => "refresh_token",
		}
	}
}
impl Display for GrantType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Transient form-encoded token request.
#[derive(Clone)]
pub struct TokenRequest<'a> {
	grant: GrantType,
	secret: &'a str,
	credentials: &'a Credentials,
	scope: Option<&'a str>,
}
impl<'a> TokenRequest<'a> {
	/// Exchanges the stored authorization code, requesting `scope` (omitted when empty).
	pub fn authorization_code(credentials: &'a Credentials, scope: &'a str) -> Self {
		Self {
			grant: GrantType::AuthorizationCode,
			secret: credentials.store_code().secret(),
			credentials,
			scope: Some(scope).filter(|value| !value.is_empty()),
		}
	}

	/// Trades `refresh_token` for a new token pair.
	pub fn refresh_token(credentials: &'a Credentials, refresh_token: &'a str) -> Self {
		Self { grant: GrantType::RefreshToken, secret: refresh_token, credentials, scope: None }
	}

	/// Grant performed by this request.
	pub fn grant(&self) -> GrantType {
		self.grant
	}

	/// Ordered form fields for the given client authentication method.
	pub fn form_fields(&self, method: ClientAuthMethod) -> Vec<(&'static str, &'a str)> {
		let mut fields = vec![
			("grant_type", self.grant.as_str()),
			(self.grant.secret_field(), self.secret),
			("redirect_uri", self.credentials.redirect_uri()),
		];

		if matches!(method, ClientAuthMethod::ClientSecretPost) {
			fields.push(("client_id", self.credentials.client_id().as_str()));
			fields.push(("client_secret", self.credentials.client_secret().secret().as_str()));
		}
		if let Some(scope) = self.scope {
			fields.push(("scope", scope));
		}

		fields
	}

	/// URL-encoded request body.
	pub fn encode_body(&self, method: ClientAuthMethod) -> String {
		Serializer::new(String::new()).extend_pairs(self.form_fields(method)).finish()
	}

	/// Builds the POST request sent to `endpoint`.
	pub fn to_http(&self, endpoint: &Url, method: ClientAuthMethod) -> Result<HttpRequest> {
		let mut builder = Request::builder()
			.method(Method::POST)
			.uri(endpoint.as_str())
			.header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE))
			.header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));

		if matches!(method, ClientAuthMethod::ClientSecretBasic) {
			builder = builder.header(AUTHORIZATION, self.basic_authorization());
		}

		builder.body(self.encode_body(method).into_bytes()).map_err(|e| ConfigError::from(e).into())
	}

	// RFC 6749 §2.3.1: both halves are form-encoded before being joined.
	fn basic_authorization(&self) -> String {
		let id: String =
			form_urlencoded::byte_serialize(self.credentials.client_id().as_bytes()).collect();
		let secret: String =
			form_urlencoded::byte_serialize(self.credentials.client_secret().secret().as_bytes())
				.collect();

		format!("Basic {}", STANDARD.encode(format!("{id}:{secret}")))
	}
}
impl Debug for TokenRequest<'_> {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenRequest")
			.field("grant", &self.grant)
			.field("client_id", &self.credentials.client_id().as_str())
			.field("redirect_uri", &self.credentials.redirect_uri())
			.field("scope", &self.scope)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn credentials() -> Credentials {
		Credentials::new("store code", "client-1", "s3cr3t&", "https://app.example.com/callback")
	}

	fn endpoint() -> Url {
		Url::parse("https://secure.myob.com/oauth2/v1/authorize")
			.expect("Endpoint fixture should parse.")
	}

	#[test]
	fn authorization_code_body_lists_six_fields_in_order() {
		let credentials = credentials();
		let request = TokenRequest::authorization_code(&credentials, "CompanyFile");

		assert_eq!(
			request.form_fields(ClientAuthMethod::ClientSecretPost),
			vec![
				("grant_type", "authorization_code"),
				("code", "store code"),
				("redirect_uri", "https://app.example.com/callback"),
				("client_id", "client-1"),
				("client_secret", "s3cr3t&"),
				("scope", "CompanyFile"),
			]
		);
		assert_eq!(
			request.encode_body(ClientAuthMethod::ClientSecretPost),
			"grant_type=authorization_code&code=store+code&redirect_uri=https%3A%2F%2Fapp.example.com%2Fcallback&client_id=client-1&client_secret=s3cr3t%26&scope=CompanyFile"
		);
	}

	#[test]
	fn refresh_body_omits_scope() {
		let credentials = credentials();
		let request = TokenRequest::refresh_token(&credentials, "refresh-1");
		let keys: Vec<_> = request
			.form_fields(ClientAuthMethod::ClientSecretPost)
			.into_iter()
			.map(|(key, _)| key)
			.collect();

		assert_eq!(request.grant(), GrantType::RefreshToken);
		assert_eq!(keys, ["grant_type", "refresh_token", "redirect_uri", "client_id", "client_secret"]);
	}

	#[test]
	fn empty_scope_is_omitted() {
		let credentials = credentials();
		let request = TokenRequest::authorization_code(&credentials, "");

		assert!(
			request
				.form_fields(ClientAuthMethod::ClientSecretPost)
				.iter()
				.all(|(key, _)| *key != "scope")
		);
	}

	#[test]
	fn http_request_carries_form_headers() {
		let credentials = credentials();
		let request = TokenRequest::refresh_token(&credentials, "refresh-1")
			.to_http(&endpoint(), ClientAuthMethod::ClientSecretPost)
			.expect("Token request should build.");

		assert_eq!(request.method(), Method::POST);
		assert_eq!(request.uri(), "https://secure.myob.com/oauth2/v1/authorize");
		assert_eq!(
			request.headers().get(CONTENT_TYPE).map(HeaderValue::as_bytes),
			Some(FORM_CONTENT_TYPE.as_bytes())
		);
		assert_eq!(
			request.headers().get(ACCEPT).map(HeaderValue::as_bytes),
			Some(JSON_CONTENT_TYPE.as_bytes())
		);
		assert!(request.headers().get(AUTHORIZATION).is_none());
	}

	#[test]
	fn basic_auth_moves_credentials_into_header() {
		let credentials = credentials();
		let request = TokenRequest::authorization_code(&credentials, "CompanyFile")
			.to_http(&endpoint(), ClientAuthMethod::ClientSecretBasic)
			.expect("Token request should build.");
		let body = String::from_utf8(request.body().clone()).expect("Body should be UTF-8.");
		let expected = format!("Basic {}", STANDARD.encode("client-1:s3cr3t%26"));

		assert_eq!(
			request.headers().get(AUTHORIZATION).map(HeaderValue::as_bytes),
			Some(expected.as_bytes())
		);
		assert!(!body.contains("client_id"));
		assert!(!body.contains("client_secret"));
		assert!(body.contains("scope=CompanyFile"));
	}

	#[test]
	fn debug_output_hides_grant_secret() {
		let credentials = credentials();
		let rendered = format!("{:?}", TokenRequest::refresh_token(&credentials, "refresh-1"));

		assert!(!rendered.contains("refresh-1"));
		assert!(!rendered.contains("s3cr3t"));
	}
}
