//! Fixed identity and wire constants for the Sunday Coffee integration.

/// Integration domain, also the prefix for button unique ids.
pub const DOMAIN: &str = "sunday_coffee";

/// Human-readable label used in display titles.
pub const INTEGRATION_LABEL: &str = "Sunday Coffee";

pub const DEFAULT_REPO_OWNER: &str = "Jherrild";
pub const DEFAULT_REPO_NAME: &str = "sunday-coffee";
pub const DEFAULT_WORKFLOW_FILE: &str = "update-coffee-status.yml";

/// Branch the workflow dispatch always references.
pub const DISPATCH_REF: &str = "main";

/// Workflow input key carrying the on/off value.
pub const STATUS_INPUT_KEY: &str = "coffee_status";

pub const GITHUB_API_BASE: &str = "https://api.github.com";
