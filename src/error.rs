//! Client-level error types shared by both token flows.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by the token flows.
///
/// Every failure is terminal for the call that produced it; the client never retries.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, body read).
	#[error(transparent)]
	Transport(#[from] TransportError),

	/// Token endpoint answered `200 OK` with a body that is not a token response.
	#[error("Token endpoint returned malformed JSON.")]
	Decode {
		/// Structured parsing failure including the JSON path that failed.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Token endpoint answered with a status other than `200 OK`.
	#[error("Failed to get access token: {status_text}.")]
	Remote {
		/// Numeric HTTP status code.
		status: u16,
		/// Status line text, e.g. `401 Unauthorized`.
		status_text: String,
		/// Raw response body, decoded lossily as UTF-8.
		body: String,
	},
}
impl Error {
	/// Returns the HTTP status of a [`Error::Remote`] failure.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Remote { status, .. } => Some(*status),
			_ => None,
		}
	}
}

/// Configuration failures raised while preparing a token request.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request construction failed.
	#[error(transparent)]
	HttpRequest(#[from] oauth2::http::Error),
	/// Client configuration failed validation.
	#[error(transparent)]
	InvalidClientConfig(#[from] crate::config::ClientConfigError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the token endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the token endpoint.")]
	Io(#[from] std::io::Error),
	/// Transport reported a failure that carries only a message.
	#[error("HTTP client error occurred while calling the token endpoint: {message}.")]
	Other {
		/// Transport-supplied description.
		message: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn remote_error_names_status_line() {
		let err = Error::Remote {
			status: 401,
			status_text: "401 Unauthorized".into(),
			body: "{\"error\":\"invalid_client\"}".into(),
		};

		assert_eq!(err.to_string(), "Failed to get access token: 401 Unauthorized.");
		assert_eq!(err.status(), Some(401));
	}

	#[test]
	fn transport_errors_keep_their_source() {
		let err = Error::from(TransportError::network(std::io::Error::new(
			std::io::ErrorKind::ConnectionRefused,
			"connection refused",
		)));

		assert_eq!(err.status(), None);
		assert!(err.source().is_some_and(|source| source.to_string() == "connection refused"));
	}
}
