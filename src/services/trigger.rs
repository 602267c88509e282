//! Action trigger: one workflow dispatch per button press, outcome
//! reported through the injected sink, never raised to the caller.

use crate::domain::{Intent, RepositoryTarget};
use crate::ports::{DispatchSink, WorkflowHost};

/// What happened to one dispatch round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// GitHub accepted the dispatch (204).
    Dispatched,
    /// GitHub answered with anything other than 204.
    Rejected { status: u16, body: String },
    /// The round trip never completed.
    TransportFailed { detail: String },
}

/// Dispatch the workflow with the given intent. Every exit path reports
/// through the sink; a failed trigger must never destabilize the caller,
/// so this returns an outcome value instead of an error.
pub fn trigger<H, S>(
    host: &H,
    sink: &S,
    target: &RepositoryTarget,
    intent: Intent,
) -> DispatchOutcome
where
    H: WorkflowHost,
    S: DispatchSink,
{
    match host.dispatch_workflow(target, intent) {
        Ok(response) if response.is_success() => {
            sink.dispatched(intent);
            DispatchOutcome::Dispatched
        }
        Ok(response) => {
            sink.rejected(intent, response.status, &response.body);
            DispatchOutcome::Rejected { status: response.status, body: response.body }
        }
        Err(err) => {
            let detail = err.to_string();
            sink.transport_failed(intent, &detail);
            DispatchOutcome::TransportFailed { detail }
        }
    }
}
