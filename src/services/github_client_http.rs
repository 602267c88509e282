//! GitHub Actions API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::Serialize;
use url::Url;

use crate::domain::integration::{DISPATCH_REF, GITHUB_API_BASE};
use crate::domain::{AppError, Credentials, Intent, RepositoryTarget};
use crate::ports::{DispatchResponse, TransportError, WorkflowHost};

const GITHUB_JSON: &str = "application/vnd.github+json";
const X_GITHUB_API_VERSION: &str = "X-GitHub-Api-Version";
/// Pinned API revision so the request/response shape cannot drift.
const GITHUB_API_VERSION: &str = "2022-11-28";
/// Explicit request bound instead of the transport default.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// HTTP client for the two GitHub endpoints this integration uses.
#[derive(Clone)]
pub struct GithubHttpClient {
    credentials: Credentials,
    api_base: Url,
    client: Client,
}

impl std::fmt::Debug for GithubHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubHttpClient")
            .field("api_base", &self.api_base)
            .field("credentials", &self.credentials)
            .finish()
    }
}

impl GithubHttpClient {
    /// Create a client against a specific API base (tests point this at
    /// a local mock server).
    pub fn new(credentials: Credentials, api_base: Url) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { credentials, api_base, client })
    }

    /// Create a client against the public GitHub API.
    pub fn github(credentials: Credentials) -> Result<Self, AppError> {
        let api_base = Url::parse(GITHUB_API_BASE)
            .map_err(|e| AppError::config_error(format!("Invalid GitHub API base: {e}")))?;
        Self::new(credentials, api_base)
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.api_base
            .join(path)
            .map_err(|e| TransportError(format!("Invalid endpoint '{path}': {e}")))
    }
}

#[derive(Debug, Serialize)]
struct DispatchRequest {
    #[serde(rename = "ref")]
    git_ref: &'static str,
    inputs: DispatchInputs,
}

#[derive(Debug, Serialize)]
struct DispatchInputs {
    coffee_status: &'static str,
}

impl WorkflowHost for GithubHttpClient {
    fn repository_status(&self, target: &RepositoryTarget) -> Result<u16, TransportError> {
        let url = self.endpoint(&format!("repos/{}/{}", target.owner(), target.name()))?;

        let response = self
            .client
            .get(url)
            .header(ACCEPT, GITHUB_JSON)
            .header(X_GITHUB_API_VERSION, GITHUB_API_VERSION)
            .bearer_auth(self.credentials.token())
            .send()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(response.status().as_u16())
    }

    fn dispatch_workflow(
        &self,
        target: &RepositoryTarget,
        intent: Intent,
    ) -> Result<DispatchResponse, TransportError> {
        let url = self.endpoint(&format!(
            "repos/{}/{}/actions/workflows/{}/dispatches",
            target.owner(),
            target.name(),
            target.workflow()
        ))?;

        let payload = DispatchRequest {
            git_ref: DISPATCH_REF,
            inputs: DispatchInputs { coffee_status: intent.as_wire_str() },
        };

        let response = self
            .client
            .post(url)
            .header(ACCEPT, GITHUB_JSON)
            .header(X_GITHUB_API_VERSION, GITHUB_API_VERSION)
            .bearer_auth(self.credentials.token())
            .json(&payload)
            .send()
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response.text().unwrap_or_else(|_| String::new());

        Ok(DispatchResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(server: &mockito::Server) -> GithubHttpClient {
        let api_base = Url::parse(&server.url()).unwrap();
        GithubHttpClient::new(Credentials::new("ghp_test"), api_base).unwrap()
    }

    #[test]
    fn repository_status_sends_pinned_headers() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/repos/Jherrild/sunday-coffee")
            .match_header("accept", "application/vnd.github+json")
            .match_header("authorization", "Bearer ghp_test")
            .match_header("x-github-api-version", "2022-11-28")
            .with_status(200)
            .create();

        let client = client_for(&server);
        let status = client.repository_status(&RepositoryTarget::default()).unwrap();

        assert_eq!(status, 200);
        mock.assert();
    }

    #[test]
    fn repository_status_surfaces_non_success_codes() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/repos/Jherrild/sunday-coffee").with_status(404).create();

        let client = client_for(&server);
        assert_eq!(client.repository_status(&RepositoryTarget::default()).unwrap(), 404);
    }

    #[test]
    fn dispatch_posts_ref_and_intent_input() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/repos/Jherrild/sunday-coffee/actions/workflows/update-coffee-status.yml/dispatches")
            .match_header("authorization", "Bearer ghp_test")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "ref": "main",
                "inputs": { "coffee_status": "true" }
            })))
            .with_status(204)
            .create();

        let client = client_for(&server);
        let response =
            client.dispatch_workflow(&RepositoryTarget::default(), Intent::Activate).unwrap();

        assert!(response.is_success());
        assert!(response.body.is_empty());
        mock.assert();
    }

    #[test]
    fn dispatch_carries_false_for_deactivate() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/repos/Jherrild/sunday-coffee/actions/workflows/update-coffee-status.yml/dispatches")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "ref": "main",
                "inputs": { "coffee_status": "false" }
            })))
            .with_status(204)
            .create();

        let client = client_for(&server);
        client.dispatch_workflow(&RepositoryTarget::default(), Intent::Deactivate).unwrap();
        mock.assert();
    }

    #[test]
    fn dispatch_returns_status_and_body_on_rejection() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/repos/Jherrild/sunday-coffee/actions/workflows/update-coffee-status.yml/dispatches")
            .with_status(500)
            .with_body("server error")
            .create();

        let client = client_for(&server);
        let response =
            client.dispatch_workflow(&RepositoryTarget::default(), Intent::Activate).unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(response.body, "server error");
        assert!(!response.is_success());
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let api_base = Url::parse("http://127.0.0.1:1").unwrap();
        let client = GithubHttpClient::new(Credentials::new("ghp_test"), api_base).unwrap();

        let result = client.repository_status(&RepositoryTarget::default());
        assert!(result.is_err());
    }

    #[test]
    fn debug_output_redacts_the_token() {
        let client = GithubHttpClient::github(Credentials::new("ghp_secret")).unwrap();
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("ghp_secret"));
    }
}
