use crate::domain::Intent;
use crate::ports::DispatchSink;

/// Production sink emitting leveled log records.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDispatchSink;

impl DispatchSink for LogDispatchSink {
    fn dispatched(&self, intent: Intent) {
        log::info!("Successfully triggered workflow for status: {}", intent.label());
    }

    fn rejected(&self, intent: Intent, status: u16, body: &str) {
        log::error!(
            "Failed to trigger workflow for status {}. Status: {}, Response: {}",
            intent.label(),
            status,
            body
        );
    }

    fn transport_failed(&self, intent: Intent, detail: &str) {
        log::error!("Error triggering workflow for status {}: {}", intent.label(), detail);
    }
}
