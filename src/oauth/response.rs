//! Inbound token responses and HTTP status classification.

// crates.io
use oauth2::{HttpResponse, http::StatusCode};
use serde::{
	Deserializer,
	de::{Error as _, Unexpected},
};
// self
use crate::{
	_prelude::*,
	auth::{AuthorizedUser, TokenGrant, TokenSecret},
};

/// JSON body returned by the token endpoint on success.
///
/// Unknown fields are ignored. Both tokens must be non-empty. `expires_in` is accepted as a
/// number or a numeric string.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
	/// Issued access token.
	#[serde(deserialize_with = "deserialize_token")]
	pub access_token: TokenSecret,
	/// Issued refresh token.
	#[serde(deserialize_with = "deserialize_token")]
	pub refresh_token: TokenSecret,
	/// Lifetime of the access token in seconds.
	#[serde(default, deserialize_with = "deserialize_expires_in")]
	pub expires_in: Option<i64>,
	/// Token type, typically `bearer`.
	#[serde(default)]
	pub token_type: Option<String>,
	/// Granted scope.
	#[serde(default)]
	pub scope: Option<String>,
	/// Authorizing user.
	#[serde(default)]
	pub user: Option<AuthorizedUser>,
}
impl TokenResponse {
	/// Decodes a response body, reporting the JSON path of any mismatch.
	pub fn from_slice(body: &[u8]) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut de).map_err(|source| Error::Decode { source })
	}

	/// Converts the response into a [`TokenGrant`] issued at `issued_at`.
	///
	/// A positive `expires_in` wins; otherwise the access token is assumed to live for
	/// `fallback`.
	pub fn into_grant(self, issued_at: OffsetDateTime, fallback: Duration) -> TokenGrant {
		let expires_in = self.expires_in.map(Duration::seconds);
		let lifetime = expires_in.filter(|value| value.is_positive()).unwrap_or(fallback);

		TokenGrant {
			access_token: self.access_token,
			refresh_token: self.refresh_token,
			issued_at,
			expires_at: issued_at.saturating_add(lifetime),
			expires_in,
			token_type: self.token_type,
			scope: self.scope,
			user: self.user,
		}
	}
}

/// Classifies a token endpoint response.
///
/// Only `200 OK` is treated as success; every other status becomes [`Error::Remote`].
pub fn read_token_response(
	response: &HttpResponse,
	issued_at: OffsetDateTime,
	fallback: Duration,
) -> Result<TokenGrant> {
	let status = response.status();

	if status != StatusCode::OK {
		return Err(Error::Remote {
			status: status.as_u16(),
			status_text: status.to_string(),
			body: String::from_utf8_lossy(response.body()).into_owned(),
		});
	}

	Ok(TokenResponse::from_slice(response.body())?.into_grant(issued_at, fallback))
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<TokenSecret, D::Error>
where
	D: Deserializer<'de>,
{
	let token = String::deserialize(deserializer)?;

	if token.is_empty() {
		return Err(D::Error::invalid_value(Unexpected::Str(""), &"a non-empty token"));
	}

	Ok(TokenSecret::new(token))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ExpiresIn {
	Seconds(i64),
	Text(String),
}

fn deserialize_expires_in<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
	D: Deserializer<'de>,
{
	match Option::<ExpiresIn>::deserialize(deserializer)? {
		None => Ok(None),
		Some(ExpiresIn::Seconds(value)) => Ok(Some(value)),
		Some(ExpiresIn::Text(raw)) => raw
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| D::Error::custom(format!("expires_in `{raw}` is not an integer"))),
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	const ISSUED_AT: OffsetDateTime = macros::datetime!(2025-01-01 00:00 UTC);

	fn response(status: u16, body: &str) -> HttpResponse {
		let mut response = HttpResponse::new(body.as_bytes().to_vec());

		*response.status_mut() =
			StatusCode::from_u16(status).expect("Status fixture should be valid.");

		response
	}

	#[test]
	fn success_honors_server_expiry() {
		let grant = read_token_response(
			&response(200, "{\"access_token\":\"A\",\"refresh_token\":\"B\",\"expires_in\":3600}"),
			ISSUED_AT,
			Duration::seconds(1200),
		)
		.expect("A 200 response with a token body should succeed.");

		assert_eq!(grant.access_token.expose(), "A");
		assert_eq!(grant.refresh_token.expose(), "B");
		assert_eq!(grant.expires_in, Some(Duration::hours(1)));
		assert_eq!(grant.expires_at, macros::datetime!(2025-01-01 01:00 UTC));
	}

	#[test]
	fn missing_or_non_positive_expiry_uses_fallback() {
		for body in [
			"{\"access_token\":\"A\",\"refresh_token\":\"B\"}",
			"{\"access_token\":\"A\",\"refresh_token\":\"B\",\"expires_in\":null}",
			"{\"access_token\":\"A\",\"refresh_token\":\"B\",\"expires_in\":0}",
		] {
			let grant = read_token_response(&response(200, body), ISSUED_AT, Duration::seconds(1200))
				.expect("Token bodies without a usable expiry should still succeed.");

			assert_eq!(grant.expires_at, macros::datetime!(2025-01-01 00:20 UTC), "{body}");
		}
	}

	#[test]
	fn string_expiry_and_myob_extras_are_parsed() {
		let body = "{\"access_token\":\"A\",\"token_type\":\"bearer\",\"expires_in\":\"1200\",\"refresh_token\":\"B\",\"scope\":\"CompanyFile\",\"user\":{\"uid\":\"u-1\",\"username\":\"owner@example.com\"}}";
		let grant = read_token_response(&response(200, body), ISSUED_AT, Duration::seconds(60))
			.expect("MYOB-shaped token bodies should parse.");

		assert_eq!(grant.expires_in, Some(Duration::seconds(1200)));
		assert_eq!(grant.token_type.as_deref(), Some("bearer"));
		assert_eq!(grant.scope.as_deref(), Some("CompanyFile"));
		assert_eq!(grant.user.map(|user| user.username), Some("owner@example.com".into()));
	}

	#[test]
	fn malformed_bodies_are_decode_errors() {
		let err = read_token_response(&response(200, "not-json"), ISSUED_AT, Duration::MINUTE)
			.expect_err("Non-JSON bodies must fail to decode.");

		assert!(matches!(err, Error::Decode { .. }));

		let err = read_token_response(
			&response(200, "{\"access_token\":\"A\"}"),
			ISSUED_AT,
			Duration::MINUTE,
		)
		.expect_err("Bodies without a refresh token must fail to decode.");

		assert!(matches!(err, Error::Decode { .. }));

		let err = read_token_response(
			&response(200, "{\"access_token\":\"A\",\"refresh_token\":\"B\",\"expires_in\":\"soon\"}"),
			ISSUED_AT,
			Duration::MINUTE,
		)
		.expect_err("Non-numeric expiry strings must fail to decode.");

		match err {
			Error::Decode { source } => assert_eq!(source.path().to_string(), "expires_in"),
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn empty_tokens_are_decode_errors() {
		for (body, field) in [
			("{\"access_token\":\"\",\"refresh_token\":\"B\"}", "access_token"),
			("{\"access_token\":\"A\",\"refresh_token\":\"\"}", "refresh_token"),
		] {
			let err = read_token_response(&response(200, body), ISSUED_AT, Duration::MINUTE)
				.expect_err("Empty tokens must not produce a grant.");

			match err {
				Error::Decode { source } => assert_eq!(source.path().to_string(), field),
				other => panic!("Unexpected error variant: {other:?}."),
			}
		}
	}

	#[test]
	fn non_ok_statuses_are_remote_errors() {
		for (status, text) in [(401, "401 Unauthorized"), (201, "201 Created")] {
			let err = read_token_response(
				&response(status, "{\"error\":\"invalid_grant\"}"),
				ISSUED_AT,
				Duration::MINUTE,
			)
			.expect_err("Only 200 OK counts as success.");

			match err {
				Error::Remote { status: code, status_text, body } => {
					assert_eq!(code, status);
					assert_eq!(status_text, text);
					assert_eq!(body, "{\"error\":\"invalid_grant\"}");
				},
				other => panic!("Unexpected error variant: {other:?}."),
			}
		}
	}
}
