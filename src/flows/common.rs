//! Request execution shared by both token flows.

// crates.io
use oauth2::{AsyncHttpClient, HttpRequest};
// self
use crate::{
	_prelude::*,
	auth::TokenGrant,
	flows::TokenClient,
	http::{self, TokenHttpClient},
	oauth::{self, TokenRequest},
	obs::{self, FlowKind, FlowOutcome, FlowSpan},
};

/// Sends one token request and classifies its response, recording span + outcome.
pub(crate) async fn exchange<C>(
	client: &TokenClient<C>,
	kind: FlowKind,
	stage: &'static str,
	request: TokenRequest<'_>,
	endpoint: &Url,
) -> Result<TokenGrant>
where
	C: ?Sized + TokenHttpClient,
{
	let span = FlowSpan::new(kind, stage);

	obs::record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = span
		.instrument(async {
			let http_request = request.to_http(endpoint, client.config.client_auth_method)?;

			send(client, http_request).await
		})
		.await;

	obs::record_flow_result(kind, &result);

	match &result {
		Ok(_) => obs::record_flow_outcome(kind, FlowOutcome::Success),
		Err(_) => obs::record_flow_outcome(kind, FlowOutcome::Failure),
	}

	result
}

async fn send<C>(client: &TokenClient<C>, request: HttpRequest) -> Result<TokenGrant>
where
	C: ?Sized + TokenHttpClient,
{
	let handle = client.http_client.handle();
	let response = handle.call(request).await.map_err(http::map_transport_error)?;

	oauth::read_token_response(
		&response,
		OffsetDateTime::now_utc(),
		client.config.default_expires_in,
	)
}
