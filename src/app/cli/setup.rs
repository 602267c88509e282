//! Interactive setup flow: prompt for the form fields, then run the
//! setup command.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Password};

use crate::app::AppContext;
use crate::app::commands::setup::{self, SetupInput};
use crate::domain::integration::{
    DEFAULT_REPO_NAME, DEFAULT_REPO_OWNER, DEFAULT_WORKFLOW_FILE,
};
use crate::domain::AppError;
use crate::ports::{ConfigStore, DispatchSink};

/// Setup form fields as passed on the command line; missing ones are
/// prompted for.
#[derive(Debug, Clone, Default)]
pub struct SetupArgs {
    pub token: Option<String>,
    pub owner: Option<String>,
    pub name: Option<String>,
    pub workflow: Option<String>,
}

/// Run setup. Returns the created entry's title, or `None` if the user
/// cancelled a prompt.
pub fn run<C, S>(ctx: &AppContext<C, S>, args: SetupArgs) -> Result<Option<String>, AppError>
where
    C: ConfigStore,
    S: DispatchSink,
{
    // Single-instance policy: abort before accepting any input.
    if ctx.store().exists() {
        return Err(AppError::AlreadyConfigured);
    }

    let Some(input) = resolve_inputs(args)? else {
        return Ok(None);
    };

    setup::execute(ctx, input).map(Some)
}

fn resolve_inputs(args: SetupArgs) -> Result<Option<SetupInput>, AppError> {
    let token = match args.token {
        Some(value) => value,
        None => match prompt_token()? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let owner = match args.owner {
        Some(value) => value,
        None => match prompt_with_default("Repository owner", DEFAULT_REPO_OWNER)? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let name = match args.name {
        Some(value) => value,
        None => match prompt_with_default("Repository name", DEFAULT_REPO_NAME)? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    let workflow = match args.workflow {
        Some(value) => value,
        None => match prompt_with_default("Workflow file", DEFAULT_WORKFLOW_FILE)? {
            Some(value) => value,
            None => return Ok(None),
        },
    };

    Ok(Some(SetupInput { token, owner, name, workflow }))
}

fn prompt_token() -> Result<Option<String>, AppError> {
    match Password::new().with_prompt("GitHub token").interact() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read token: {err}"))),
    }
}

fn prompt_with_default(prompt: &str, default: &str) -> Result<Option<String>, AppError> {
    match Input::new().with_prompt(prompt).default(default.to_string()).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::config_error(format!("Failed to read {prompt}: {err}"))),
    }
}
