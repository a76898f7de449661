use crate::error::DashboardError;
use crate::models::issue::SearchItem;
use crate::services::github::{self, GitHubApi};

/// Run one issue/PR search and map the hits into dashboard entries.
///
/// Exactly one page is fetched; `limit` doubles as the requested page size,
/// and the result is truncated to it even if the upstream returns more.
pub async fn search_issues(
    api: &dyn GitHubApi,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchItem>, DashboardError> {
    let url = github::search_url(query, limit);
    let data = api.get_json(&url).await?;

    let mut items: Vec<SearchItem> = data
        .get("items")
        .and_then(|items| items.as_array())
        .map(|items| items.iter().map(SearchItem::from_api).collect())
        .unwrap_or_default();
    items.truncate(limit);

    log::debug!("🔍 Search '{}' returned {} items", query, items.len());
    Ok(items)
}
