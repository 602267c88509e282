pub mod config;
pub mod error;
pub mod integration;
pub mod intent;
pub mod schedule;

pub use config::{Credentials, RepositoryTarget, TriggerConfig};
pub use error::{AppError, ValidationError};
pub use intent::Intent;
