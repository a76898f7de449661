use async_trait::async_trait;
use serde_json::Value;

use crate::error::DashboardError;
use crate::utils::http_client::create_http_client;

pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Read-only access to the GitHub REST and search APIs. The pipeline only
/// talks to this trait, so tests can substitute canned responses.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Issue one GET request and parse the response body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, DashboardError>;
}

/// Live client. Requests carry the GitHub media-type and API-version
/// headers and, when a token is configured, a bearer authorization.
///
/// There is no retry or rate-limit backoff: a failed or throttled call is
/// fatal for the whole run.
pub struct GitHubClient {
    client: reqwest::Client,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(token: Option<String>) -> Self {
        GitHubClient {
            client: create_http_client(),
            token,
        }
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn get_json(&self, url: &str) -> Result<Value, DashboardError> {
        log::debug!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| DashboardError::UpstreamFetch {
                url: url.to_string(),
                status: None,
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::UpstreamFetch {
                url: url.to_string(),
                status: Some(status.as_u16()),
                detail: format!("status {}: {}", status, body),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| DashboardError::UpstreamFetch {
                url: url.to_string(),
                status: Some(status.as_u16()),
                detail: format!("unparseable response body: {}", e),
            })
    }
}

pub fn viewer_url() -> String {
    format!("{}/user", GITHUB_API_BASE)
}

pub fn user_url(username: &str) -> String {
    format!("{}/users/{}", GITHUB_API_BASE, urlencoding::encode(username))
}

/// Listing for the authenticated account, private repositories included.
pub fn own_repos_url(page: u32) -> String {
    format!(
        "{}/user/repos?sort=updated&per_page=100&page={}",
        GITHUB_API_BASE, page
    )
}

/// Public listing for an arbitrary user.
pub fn user_repos_url(username: &str, page: u32) -> String {
    format!(
        "{}/users/{}/repos?sort=updated&per_page=100&page={}",
        GITHUB_API_BASE,
        urlencoding::encode(username),
        page
    )
}

pub fn org_repos_url(org: &str, page: u32) -> String {
    format!(
        "{}/orgs/{}/repos?sort=updated&per_page=100&page={}",
        GITHUB_API_BASE,
        urlencoding::encode(org),
        page
    )
}

/// Issue/PR search, newest first. `limit` doubles as the page size, so one
/// request is always enough.
pub fn search_url(query: &str, limit: usize) -> String {
    format!(
        "{}/search/issues?q={}&sort=updated&order=desc&per_page={}",
        GITHUB_API_BASE,
        urlencoding::encode(query),
        limit
    )
}
