//! Observability sink for trigger outcomes, injected per call so the
//! core never touches global log state.

use crate::domain::Intent;

/// Receives exactly one call per trigger round trip.
pub trait DispatchSink {
    /// The workflow dispatch was accepted (204).
    fn dispatched(&self, intent: Intent);

    /// GitHub answered with anything other than 204.
    fn rejected(&self, intent: Intent, status: u16, body: &str);

    /// The round trip never completed.
    fn transport_failed(&self, intent: Intent, detail: &str);
}
