//! OAuth 2.0 token exchanges for the MYOB accounting API: trade an authorization code or a
//! refresh token for a fresh token pair over a pluggable, timeout-aware transport.
//!
//! ```no_run
//! # async fn run() -> myob_oauth2::error::Result<()> {
//! use myob_oauth2::flows::TokenClient;
//!
//! let client = TokenClient::new(
//! 	"store-code",
//! 	"client-id",
//! 	"client-secret",
//! 	"https://app.example.com/callback",
//! )?;
//! let grant = client.exchange_authorization_code().await?;
//! let rotated = client.refresh_access_token(grant.refresh_token.expose()).await?;
//!
//! assert!(rotated.expires_at > rotated.issued_at);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod config;
pub mod error;
pub mod flows;
pub mod http;
pub mod oauth;
pub mod obs;

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
		time::Duration as StdDuration,
	};

	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)]
use {
	color_eyre as _, httpmock as _, metrics_util as _, parking_lot as _, tracing_subscriber as _,
};
