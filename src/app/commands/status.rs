//! Status command: report the configured target, never the token.

use crate::app::AppContext;
use crate::domain::integration::INTEGRATION_LABEL;
use crate::domain::schedule::{format_sunday, upcoming_sunday};
use crate::domain::AppError;
use crate::ports::{ConfigStore, DispatchSink};

/// What `coffeectl status` prints.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub title: String,
    pub repository: String,
    pub workflow: String,
    pub next_sunday: String,
}

pub fn execute<C, S>(ctx: &AppContext<C, S>) -> Result<StatusReport, AppError>
where
    C: ConfigStore,
    S: DispatchSink,
{
    let config = ctx.store().load()?;
    let target = config.target();

    Ok(StatusReport {
        title: format!("{INTEGRATION_LABEL} - {}", target.slug()),
        repository: target.slug(),
        workflow: target.workflow().to_string(),
        next_sunday: format_sunday(upcoming_sunday()),
    })
}
