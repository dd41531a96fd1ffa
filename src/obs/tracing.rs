// self
use crate::{_prelude::*, auth::TokenGrant, obs::FlowKind};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// A span builder used by token flows.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided flow kind + stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("myob_oauth2.flow", flow = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedFlow<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Emits an event describing how a flow finished. Token values are never logged.
pub fn record_flow_result(kind: FlowKind, result: &Result<TokenGrant>) {
	#[cfg(feature = "tracing")]
	{
		match result {
			Ok(grant) => tracing::debug!(
				flow = kind.as_str(),
				expires_at = %grant.expires_at,
				server_expiry = grant.expires_in.is_some(),
				"token endpoint issued a token pair"
			),
			Err(Error::Remote { status, body, .. }) => tracing::warn!(
				flow = kind.as_str(),
				status = *status,
				body = body.as_str(),
				"token endpoint rejected the request"
			),
			Err(err) => tracing::warn!(flow = kind.as_str(), error = %err, "token request failed"),
		}
	}

	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, result);
	}
}
