//! coffeectl: control the Sunday Coffee status page by triggering its
//! GitHub Actions update workflow.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::env;

use url::Url;

use app::AppContext;
use app::commands::{press, status};
use domain::integration::GITHUB_API_BASE;
use domain::schedule::{format_sunday, upcoming_sunday};
use services::{FilesystemConfigStore, LogDispatchSink};

pub use app::cli::setup::SetupArgs;
pub use domain::{AppError, Credentials, Intent, RepositoryTarget, TriggerConfig, ValidationError};
pub use services::{DispatchOutcome, trigger, validate};

const API_BASE_ENV: &str = "COFFEECTL_API_BASE";

fn resolve_api_base() -> Result<Url, AppError> {
    let raw = env::var(API_BASE_ENV).unwrap_or_else(|_| GITHUB_API_BASE.to_string());
    Url::parse(&raw)
        .map_err(|e| AppError::config_error(format!("Invalid API base URL '{raw}': {e}")))
}

fn default_context() -> Result<AppContext<FilesystemConfigStore, LogDispatchSink>, AppError> {
    let store = FilesystemConfigStore::default_location()?;
    Ok(AppContext::new(store, LogDispatchSink, resolve_api_base()?))
}

/// Run the guided setup flow: validate the token against GitHub and
/// persist the configuration.
pub fn setup(args: SetupArgs) -> Result<(), AppError> {
    let ctx = default_context()?;

    match app::cli::setup::run(&ctx, args)? {
        Some(title) => {
            println!("✅ Configured {title}");
            println!("Config written to {}", ctx.store().path().display());
        }
        None => println!("Setup cancelled"),
    }
    Ok(())
}

/// Handle a button press: dispatch the update workflow with the given
/// intent. Dispatch failures are reported, never raised.
pub fn press(intent: Intent) -> Result<(), AppError> {
    let ctx = default_context()?;

    match press::execute(&ctx, intent)? {
        DispatchOutcome::Dispatched => {
            println!(
                "✅ Coffee will be {} for {}",
                intent.label(),
                format_sunday(upcoming_sunday())
            );
        }
        DispatchOutcome::Rejected { status, .. } => {
            println!("⚠️  GitHub rejected the dispatch (HTTP {status}); see logs for details");
        }
        DispatchOutcome::TransportFailed { .. } => {
            println!("⚠️  Could not reach GitHub; see logs for details");
        }
    }
    Ok(())
}

/// Print the configured repository and the upcoming Sunday.
pub fn status() -> Result<(), AppError> {
    let ctx = default_context()?;
    let report = status::execute(&ctx)?;

    println!("{}", report.title);
    println!("Repository: {}", report.repository);
    println!("Workflow: {}", report.workflow);
    println!("Next Sunday: {}", report.next_sunday);
    Ok(())
}
