//! Port for the host's configuration persistence.

use crate::domain::{AppError, TriggerConfig};

/// Stores at most one configuration per installation.
pub trait ConfigStore {
    /// Whether a configuration already exists (single-instance check).
    fn exists(&self) -> bool;

    /// Load the stored configuration, `AppError::NotConfigured` if absent.
    fn load(&self) -> Result<TriggerConfig, AppError>;

    /// Persist the configuration produced by a completed setup flow.
    fn save(&self, config: &TriggerConfig) -> Result<(), AppError>;
}
