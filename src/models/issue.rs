use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One issue or pull request hit from the search API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchItem {
    pub title: String,
    pub url: String,
    pub repo: String,
    pub updated_at: String,
}

impl SearchItem {
    pub fn from_api(raw: &Value) -> Self {
        SearchItem {
            title: raw
                .get("title")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            url: raw
                .get("html_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            repo: repo_slug(
                raw.get("repository_url")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            updated_at: raw
                .get("updated_at")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        }
    }
}

/// `owner/repo` from the trailing two path segments of a repository API URL.
fn repo_slug(repository_url: &str) -> String {
    if repository_url.is_empty() {
        return String::new();
    }
    let segments: Vec<&str> = repository_url.split('/').collect();
    let start = segments.len().saturating_sub(2);
    segments[start..].join("/")
}
