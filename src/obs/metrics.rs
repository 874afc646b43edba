//! `identity_broker_flow_total` counter behind the `metrics` feature.

// self
use crate::obs::{FlowKind, FlowOutcome};

/// Bumps `identity_broker_flow_total{flow, outcome}` on the installed recorder.
///
/// Does nothing when the `metrics` feature is off or no recorder is installed.
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"identity_broker_flow_total",
			"flow" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
