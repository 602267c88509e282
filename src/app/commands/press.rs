//! Press command: one button press, one workflow dispatch.

use crate::app::AppContext;
use crate::domain::{AppError, Intent};
use crate::ports::{ConfigStore, DispatchSink};
use crate::services::{DispatchOutcome, GithubHttpClient, trigger};

/// Load the stored configuration and dispatch the workflow. Only
/// missing configuration is an error; the dispatch itself always
/// resolves to an outcome.
pub fn execute<C, S>(ctx: &AppContext<C, S>, intent: Intent) -> Result<DispatchOutcome, AppError>
where
    C: ConfigStore,
    S: DispatchSink,
{
    let config = ctx.store().load()?;

    log::info!(
        "Button {} pressed; triggering Sunday Coffee status update: {}",
        intent.unique_id(),
        intent.label()
    );

    let host = GithubHttpClient::new(config.credentials().clone(), ctx.api_base().clone())?;
    Ok(trigger(&host, ctx.sink(), config.target(), intent))
}
