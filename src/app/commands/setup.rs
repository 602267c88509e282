//! Setup command: validate credentials, persist the configuration.

use crate::app::AppContext;
use crate::domain::{AppError, Credentials, RepositoryTarget, TriggerConfig, ValidationError};
use crate::ports::{ConfigStore, DispatchSink};
use crate::services::{GithubHttpClient, validate};

/// Resolved setup form fields (defaults already applied).
#[derive(Debug, Clone)]
pub struct SetupInput {
    pub token: String,
    pub owner: String,
    pub name: String,
    pub workflow: String,
}

/// Run validation and persist the configuration. Returns the display
/// title of the created entry.
pub fn execute<C, S>(ctx: &AppContext<C, S>, input: SetupInput) -> Result<String, AppError>
where
    C: ConfigStore,
    S: DispatchSink,
{
    if ctx.store().exists() {
        return Err(AppError::AlreadyConfigured);
    }

    let credentials = Credentials::new(input.token);
    let target = RepositoryTarget::new(input.owner, input.name, input.workflow);

    let host = GithubHttpClient::new(credentials.clone(), ctx.api_base().clone())
        .map_err(|e| ValidationError::Unknown(e.to_string()))?;

    let title = match validate(&host, &credentials, &target) {
        Ok(title) => title,
        Err(err) => {
            match &err {
                ValidationError::InvalidAuth => {}
                ValidationError::Connection(detail) => {
                    log::error!("Could not reach GitHub during setup: {detail}");
                }
                ValidationError::Unknown(detail) => {
                    log::error!("Unexpected exception during setup: {detail}");
                }
            }
            return Err(err.into());
        }
    };

    ctx.store().save(&TriggerConfig::new(credentials, target))?;
    Ok(title)
}
