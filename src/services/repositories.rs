use std::collections::HashSet;

use crate::error::DashboardError;
use crate::models::repository::Repository;
use crate::services::github::{self, GitHubApi};

const PRIMARY_PAGE_LIMIT: u32 = 5;
const ORG_PAGE_LIMIT: u32 = 3;

/// Insertion-ordered set of repositories keyed by full name. The first
/// insert for a given name wins; later sources cannot overwrite it.
struct RepositoryIndex {
    entries: Vec<Repository>,
    seen: HashSet<String>,
}

impl RepositoryIndex {
    fn new() -> Self {
        RepositoryIndex {
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn insert_if_absent(&mut self, repo: Repository) {
        if self.seen.contains(&repo.name) {
            return;
        }
        self.seen.insert(repo.name.clone());
        self.entries.push(repo);
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// Most recently updated first. The sort is stable, so entries with the
    /// same timestamp keep their first-seen order and the result is
    /// deterministic for identical inputs.
    fn into_sorted(mut self, max: usize) -> Vec<Repository> {
        // ISO-8601 timestamps compare correctly as strings.
        self.entries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        self.entries.truncate(max);
        self.entries
    }
}

/// Collect repositories for the dashboard: the user's own listing first,
/// then each configured organization, deduplicated by full name and kept to
/// the `max_repositories` most recently updated.
///
/// With `include_private` the authenticated `/user/repos` listing is used;
/// otherwise only the public `/users/{username}/repos` listing.
pub async fn collect_repositories(
    api: &dyn GitHubApi,
    username: &str,
    include_private: bool,
    organizations: &[String],
    max_repositories: usize,
) -> Result<Vec<Repository>, DashboardError> {
    let mut index = RepositoryIndex::new();

    collect_source(api, &mut index, max_repositories, PRIMARY_PAGE_LIMIT, |page| {
        if include_private {
            github::own_repos_url(page)
        } else {
            github::user_repos_url(username, page)
        }
    })
    .await?;

    for org in organizations {
        if index.len() >= max_repositories {
            break;
        }
        log::debug!("Collecting repositories for organization {}", org);
        collect_source(api, &mut index, max_repositories, ORG_PAGE_LIMIT, |page| {
            github::org_repos_url(org, page)
        })
        .await?;
    }

    let repos = index.into_sorted(max_repositories);
    log::info!("📦 Collected {} repositories", repos.len());
    Ok(repos)
}

/// Page through one listing source until a page comes back empty, the
/// source's page limit is reached, or the running total hits the cap.
async fn collect_source(
    api: &dyn GitHubApi,
    index: &mut RepositoryIndex,
    max_repositories: usize,
    page_limit: u32,
    url_for_page: impl Fn(u32) -> String,
) -> Result<(), DashboardError> {
    let mut page = 1;
    while index.len() < max_repositories && page <= page_limit {
        let chunk = api.get_json(&url_for_page(page)).await?;
        let items = chunk.as_array().map(|a| a.as_slice()).unwrap_or(&[]);
        if items.is_empty() {
            break;
        }
        for raw in items {
            index.insert_if_absent(Repository::from_api(raw));
            if index.len() >= max_repositories {
                break;
            }
        }
        page += 1;
    }
    Ok(())
}
