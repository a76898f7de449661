use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn from_private_flag(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// One repository row on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub url: String,
    pub updated_at: String,
    pub stars: u64,
    pub open_issues: u64,
    pub language: String,
    pub visibility: Visibility,
}

impl Repository {
    /// Build an entry from one element of a repository-listing response.
    /// Every field is optional upstream; missing values get empty-string or
    /// zero defaults and an absent private flag reads as public.
    pub fn from_api(raw: &Value) -> Self {
        Repository {
            name: raw
                .get("full_name")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            url: raw
                .get("html_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            updated_at: raw
                .get("updated_at")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            stars: raw
                .get("stargazers_count")
                .and_then(|v| v.as_u64())
                .unwrap_or(0),
            open_issues: raw
                .get("open_issues_count")
                .and_then(|v| v.as_u64())
                .unwrap_or(0),
            language: raw
                .get("language")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            visibility: Visibility::from_private_flag(
                raw.get("private").and_then(|v| v.as_bool()).unwrap_or(false),
            ),
        }
    }
}
