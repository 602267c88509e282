//! Setup validation: one authenticated read against the target repository.

use crate::domain::integration::INTEGRATION_LABEL;
use crate::domain::{Credentials, RepositoryTarget, ValidationError};
use crate::ports::WorkflowHost;

/// Check that the credentials can see the target repository.
///
/// A blank token fails before any network call. Any non-200 answer is
/// classified as `InvalidAuth`; a bad token and an inaccessible
/// repository are indistinguishable on purpose.
pub fn validate<H: WorkflowHost>(
    host: &H,
    credentials: &Credentials,
    target: &RepositoryTarget,
) -> Result<String, ValidationError> {
    if credentials.is_blank() {
        return Err(ValidationError::InvalidAuth);
    }

    match host.repository_status(target) {
        Ok(200) => Ok(format!("{INTEGRATION_LABEL} - {}", target.slug())),
        Ok(_) => Err(ValidationError::InvalidAuth),
        Err(err) => Err(ValidationError::Connection(err.to_string())),
    }
}
