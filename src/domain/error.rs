use std::io;

use thiserror::Error;

/// Library-wide error type for coffeectl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A Sunday Coffee configuration already exists; only one instance is allowed.
    #[error("Sunday Coffee is already configured. Remove the existing configuration to run setup again.")]
    AlreadyConfigured,

    /// No configuration found. Setup has not been run.
    #[error("Not configured. Run 'coffeectl setup' first.")]
    NotConfigured,

    /// Setup validation failed; carries the form error code the host surfaces.
    #[error("Setup validation failed [{code}]: {0}", code = .0.form_code())]
    Validation(#[from] ValidationError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    TomlSerializeError(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}

/// Outcome classification for the setup validation round trip.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Empty token, or GitHub rejected the credentials or repository.
    /// Deliberately covers both a bad token and an inaccessible repository.
    #[error("GitHub rejected the token or repository")]
    InvalidAuth,

    /// Transport-level failure reaching GitHub.
    #[error("Could not reach GitHub: {0}")]
    Connection(String),

    /// Anything else that went wrong during validation.
    #[error("Unexpected validation failure: {0}")]
    Unknown(String),
}

impl ValidationError {
    /// Error code shown on the setup form.
    pub fn form_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidAuth => "invalid_auth",
            ValidationError::Connection(_) | ValidationError::Unknown(_) => "unknown",
        }
    }
}
