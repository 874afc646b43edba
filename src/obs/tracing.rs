//! Span and event plumbing behind the `tracing` feature.
//!
//! Every item compiles to a no-op when the feature is off.

// self
use crate::{_prelude::*, error::ExchangeStage, obs::FlowKind};

/// Future returned by [`FlowSpan::instrument`]: the span-carrying wrapper under `tracing`, the
/// bare future otherwise.
#[cfg(feature = "tracing")]
pub type InstrumentedFlow<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`FlowSpan::instrument`]: the span-carrying wrapper under `tracing`, the
/// bare future otherwise.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedFlow<F> = F;

/// `identity_broker.flow` span opened around one login or exchange call.
///
/// Fields are limited to `flow` and the entry point name; client secrets, codes and tokens are
/// never attached.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Opens the span for `entry` (e.g. `exchange_code`) of the `kind` flow.
	pub fn new(kind: FlowKind, entry: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			Self { span: tracing::info_span!("identity_broker.flow", flow = kind.as_str(), entry) }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, entry);

			Self {}
		}
	}

	/// Keeps the span entered until the returned guard drops. Only for code without `.await`.
	pub fn entered(self) -> FlowSpanGuard {
		#[cfg(feature = "tracing")]
		{
			FlowSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			FlowSpanGuard {}
		}
	}

	/// Attaches the span to `fut` so it is re-entered on every poll.
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

/// Guard from [`FlowSpan::entered`]; leaves the span on drop.
pub struct FlowSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for FlowSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FlowSpanGuard(..)")
	}
}

/// Logs, at `debug`, which provider call answered, with its status and body size.
///
/// The status is informational only; the exchange decodes the body regardless.
pub fn record_response(stage: ExchangeStage, status: u16, body_len: usize) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(stage = stage.as_str(), status, body_len, "Provider responded.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (stage, status, body_len);
	}
}
