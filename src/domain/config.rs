//! Immutable configuration record: credentials plus repository target.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::integration::{DEFAULT_REPO_NAME, DEFAULT_REPO_OWNER, DEFAULT_WORKFLOW_FILE};

/// Opaque GitHub bearer token. Never logged or printed.
#[derive(Clone)]
pub struct Credentials(String);

impl Credentials {
    pub fn new<S: Into<String>>(token: S) -> Self {
        Credentials(token.into())
    }

    pub fn token(&self) -> &str {
        &self.0
    }

    /// True when the token is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credentials").field(&"[REDACTED]").finish()
    }
}

/// Addresses one workflow in one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryTarget {
    owner: String,
    name: String,
    workflow: String,
}

impl RepositoryTarget {
    pub fn new<S: Into<String>>(owner: S, name: S, workflow: S) -> Self {
        RepositoryTarget { owner: owner.into(), name: name.into(), workflow: workflow.into() }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn workflow(&self) -> &str {
        &self.workflow
    }

    /// `owner/name` form used in titles and status output.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl Default for RepositoryTarget {
    fn default() -> Self {
        RepositoryTarget::new(DEFAULT_REPO_OWNER, DEFAULT_REPO_NAME, DEFAULT_WORKFLOW_FILE)
    }
}

/// The validated (credentials, target) pair. Created once by setup,
/// read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ConfigFile", into = "ConfigFile")]
pub struct TriggerConfig {
    credentials: Credentials,
    target: RepositoryTarget,
}

impl TriggerConfig {
    pub fn new(credentials: Credentials, target: RepositoryTarget) -> Self {
        TriggerConfig { credentials, target }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn target(&self) -> &RepositoryTarget {
        &self.target
    }
}

/// On-disk TOML form. Keys match the original integration's field names.
#[derive(Clone, Serialize, Deserialize)]
struct ConfigFile {
    github_token: String,
    #[serde(default = "default_owner")]
    repo_owner: String,
    #[serde(default = "default_name")]
    repo_name: String,
    #[serde(default = "default_workflow")]
    workflow_file: String,
}

fn default_owner() -> String {
    DEFAULT_REPO_OWNER.to_string()
}

fn default_name() -> String {
    DEFAULT_REPO_NAME.to_string()
}

fn default_workflow() -> String {
    DEFAULT_WORKFLOW_FILE.to_string()
}

impl From<ConfigFile> for TriggerConfig {
    fn from(file: ConfigFile) -> Self {
        TriggerConfig {
            credentials: Credentials::new(file.github_token),
            target: RepositoryTarget::new(file.repo_owner, file.repo_name, file.workflow_file),
        }
    }
}

impl From<TriggerConfig> for ConfigFile {
    fn from(config: TriggerConfig) -> Self {
        ConfigFile {
            github_token: config.credentials.0,
            repo_owner: config.target.owner,
            repo_name: config.target.name,
            workflow_file: config.target.workflow,
        }
    }
}
