//! Normalized token pair returned by a successful exchange.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// MYOB account that authorized the application, when reported by the token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizedUser {
	/// Stable user identifier.
	pub uid: String,
	/// Login name of the user.
	pub username: String,
}

/// Token pair issued by one exchange or refresh call.
///
/// The client keeps no copy; callers persist and rotate grants themselves.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TokenGrant {
	/// Bearer credential for subsequent API calls.
	pub access_token: TokenSecret,
	/// Long-lived credential used by [`refresh_access_token`](crate::flows::TokenClient::refresh_access_token).
	pub refresh_token: TokenSecret,
	/// Instant the response was received.
	pub issued_at: OffsetDateTime,
	/// Instant the access token stops being valid.
	pub expires_at: OffsetDateTime,
	/// Lifetime reported by the token endpoint, if it sent one.
	pub expires_in: Option<Duration>,
	/// Token type reported by the token endpoint (typically `bearer`).
	pub token_type: Option<String>,
	/// Scope string reported by the token endpoint.
	pub scope: Option<String>,
	/// Authorizing user, if included in the response.
	pub user: Option<AuthorizedUser>,
}
impl TokenGrant {
	/// Returns `true` if the access token has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Returns `true` if the access token is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}

	/// Lifetime left at `instant`, clamped to zero once expired.
	pub fn remaining_at(&self, instant: OffsetDateTime) -> Duration {
		let remaining = self.expires_at - instant;

		if remaining.is_negative() { Duration::ZERO } else { remaining }
	}
}
