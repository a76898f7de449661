use chrono::Utc;
use serde_json::Value;

use crate::error::DashboardError;
use crate::models::dashboard::{Dashboard, Summary};
use crate::models::profile::Profile;
use crate::services::github::{self, GitHubApi};
use crate::services::{languages, repositories, resolver, search};
use crate::utils::config::DashboardConfig;

/// Run the whole aggregation pipeline and assemble the dashboard document.
///
/// Calls are awaited strictly in sequence and the first failure aborts the
/// run, so identical upstream responses always produce an identical
/// document.
pub async fn build_dashboard(
    api: &dyn GitHubApi,
    config: &DashboardConfig,
) -> Result<Dashboard, DashboardError> {
    let mut username = resolver::resolve_username(&config.profile, &config.username);

    // Last resort: ask the API who the token belongs to. Without a token
    // there is nothing to ask, and the run fails before any request.
    if username.is_empty() && config.github_token.is_some() {
        let viewer = api.get_json(&github::viewer_url()).await?;
        username = viewer
            .get("login")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
    }
    if username.is_empty() {
        return Err(DashboardError::UsernameResolution);
    }

    log::info!("📊 Building dashboard for {}", username);

    let profile_raw = api.get_json(&github::user_url(&username)).await?;
    let profile = Profile::from_api(&profile_raw, &username);

    let repositories = repositories::collect_repositories(
        api,
        &username,
        config.include_private,
        &config.organizations,
        config.max_repositories,
    )
    .await?;

    let limit = config.max_items_per_section;
    let authored_prs =
        search::search_issues(api, &format!("is:pr is:open author:{}", username), limit).await?;
    let review_requested_prs = search::search_issues(
        api,
        &format!("is:pr is:open review-requested:{}", username),
        limit,
    )
    .await?;
    let assigned_issues = search::search_issues(
        api,
        &format!("is:issue is:open assignee:{}", username),
        limit,
    )
    .await?;
    let authored_issues = search::search_issues(
        api,
        &format!("is:issue is:open author:{}", username),
        limit,
    )
    .await?;

    let languages = languages::aggregate_languages(&repositories);
    let repo_stars = repositories.iter().map(|repo| repo.stars).sum();

    let summary = Summary {
        repositories: repositories.len() as u64,
        authored_prs: authored_prs.len() as u64,
        review_requested_prs: review_requested_prs.len() as u64,
        assigned_issues: assigned_issues.len() as u64,
        authored_issues: authored_issues.len() as u64,
        repo_stars,
    };

    log::info!(
        "✅ Dashboard assembled: {} repositories, {} languages",
        summary.repositories,
        languages.len()
    );

    Ok(Dashboard {
        username,
        profile,
        summary,
        languages,
        recent_repositories: repositories,
        authored_prs,
        review_requested_prs,
        assigned_issues,
        authored_issues,
    })
}

/// Wall-clock label stamped on rendered output, e.g. `2024-05-01 12:00:00 UTC`.
pub fn generation_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::services::github::testing::FakeApi;

    fn test_config(token: Option<&str>, profile: &str, username: &str) -> DashboardConfig {
        DashboardConfig {
            github_token: token.map(String::from),
            include_private: false,
            max_repositories: 20,
            max_items_per_section: 20,
            organizations: Vec::new(),
            profile: profile.to_string(),
            username: username.to_string(),
        }
    }

    fn profile_json() -> Value {
        json!({
            "name": "Alice Example",
            "bio": "",
            "avatar_url": "https://avatars.githubusercontent.com/u/1",
            "html_url": "https://github.com/alice",
            "followers": 1,
            "following": 2,
            "public_repos": 3,
            "company": "",
            "location": ""
        })
    }

    fn populated_api() -> FakeApi {
        FakeApi::new()
            .with(github::user_url("alice"), profile_json())
            .with(
                github::user_repos_url("alice", 1),
                json!([
                    {
                        "full_name": "alice/widget",
                        "html_url": "https://github.com/alice/widget",
                        "updated_at": "2024-05-01T12:00:00Z",
                        "stargazers_count": 7,
                        "open_issues_count": 1,
                        "language": "Rust",
                        "private": false
                    },
                    {
                        "full_name": "alice/gadget",
                        "html_url": "https://github.com/alice/gadget",
                        "updated_at": "2024-04-01T12:00:00Z",
                        "stargazers_count": 3,
                        "open_issues_count": 0,
                        "language": "Rust",
                        "private": false
                    }
                ]),
            )
            .with(
                github::search_url("is:pr is:open author:alice", 20),
                json!({
                    "items": [{
                        "title": "Add feature",
                        "html_url": "https://github.com/acme/widget/pull/1",
                        "repository_url": "https://api.github.com/repos/acme/widget",
                        "updated_at": "2024-05-02T12:00:00Z"
                    }]
                }),
            )
    }

    #[tokio::test]
    async fn test_assembles_document() {
        let api = populated_api();
        let config = test_config(None, "", "alice");

        let dashboard = build_dashboard(&api, &config).await.unwrap();

        assert_eq!(dashboard.username, "alice");
        assert_eq!(dashboard.profile.name, "Alice Example");
        assert_eq!(dashboard.summary.repositories, 2);
        assert_eq!(dashboard.summary.repo_stars, 10);
        assert_eq!(dashboard.summary.authored_prs, 1);
        assert_eq!(dashboard.summary.review_requested_prs, 0);
        assert_eq!(dashboard.recent_repositories[0].name, "alice/widget");
        assert_eq!(dashboard.languages.len(), 1);
        assert_eq!(dashboard.languages[0].count, 2);
    }

    #[tokio::test]
    async fn test_identical_responses_produce_identical_documents() {
        let config = test_config(None, "https://github.com/alice", "");

        let first = build_dashboard(&populated_api(), &config).await.unwrap();
        let second = build_dashboard(&populated_api(), &config).await.unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[tokio::test]
    async fn test_unresolvable_username_fails_before_any_request() {
        let api = FakeApi::new();
        let config = test_config(None, "", "");

        let result = build_dashboard(&api, &config).await;

        assert!(matches!(result, Err(DashboardError::UsernameResolution)));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_token_identity_fallback() {
        let api = FakeApi::new()
            .with(github::viewer_url(), json!({ "login": "carol" }))
            .with(github::user_url("carol"), json!({}));
        let config = test_config(Some("ghp_abc"), "", "");

        let dashboard = build_dashboard(&api, &config).await.unwrap();

        assert_eq!(dashboard.username, "carol");
        assert_eq!(dashboard.profile.name, "carol");
        assert_eq!(dashboard.summary.repositories, 0);
        assert!(dashboard.languages.is_empty());
        assert_eq!(api.calls()[0], github::viewer_url());
    }

    #[tokio::test]
    async fn test_viewer_without_login_fails() {
        let api = FakeApi::new().with(github::viewer_url(), json!({}));
        let config = test_config(Some("ghp_abc"), "", "");

        let result = build_dashboard(&api, &config).await;

        assert!(matches!(result, Err(DashboardError::UsernameResolution)));
        assert_eq!(api.call_count(), 1);
    }

    #[test]
    fn test_generation_timestamp_format() {
        let stamp = generation_timestamp();
        assert!(stamp.ends_with(" UTC"));
        assert_eq!(stamp.len(), "2024-05-01 12:00:00 UTC".len());
    }
}
