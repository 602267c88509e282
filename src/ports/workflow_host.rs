//! Port for the remote GitHub Actions surface.

use thiserror::Error;

use crate::domain::{Intent, RepositoryTarget};

/// Failure to complete an HTTP round trip (DNS, TLS, refused, timeout).
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// What the dispatch endpoint answered.
#[derive(Debug, Clone)]
pub struct DispatchResponse {
    pub status: u16,
    /// Full response body text; empty on the 204 success path.
    pub body: String,
}

impl DispatchResponse {
    /// GitHub signals a successful dispatch with 204 and no body.
    pub fn is_success(&self) -> bool {
        self.status == 204
    }
}

/// Port for the two GitHub API operations this integration uses.
pub trait WorkflowHost {
    /// GET the repository and return the HTTP status code.
    fn repository_status(&self, target: &RepositoryTarget) -> Result<u16, TransportError>;

    /// POST a workflow dispatch carrying the intent.
    fn dispatch_workflow(
        &self,
        target: &RepositoryTarget,
        intent: Intent,
    ) -> Result<DispatchResponse, TransportError>;
}
