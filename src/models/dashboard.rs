use serde::{Deserialize, Serialize};

use crate::models::issue::SearchItem;
use crate::models::profile::Profile;
use crate::models::repository::Repository;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub name: String,
    pub count: u64,
}

/// Headline counters across all sections, plus the star total over the
/// collected repositories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub repositories: u64,
    pub authored_prs: u64,
    pub review_requested_prs: u64,
    pub assigned_issues: u64,
    pub authored_issues: u64,
    pub repo_stars: u64,
}

/// The complete dashboard document. Field order here is the key order of
/// the serialized JSON, which downstream consumers treat as stable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub username: String,
    pub profile: Profile,
    pub summary: Summary,
    pub languages: Vec<LanguageCount>,
    pub recent_repositories: Vec<Repository>,
    pub authored_prs: Vec<SearchItem>,
    pub review_requested_prs: Vec<SearchItem>,
    pub assigned_issues: Vec<SearchItem>,
    pub authored_issues: Vec<SearchItem>,
}
