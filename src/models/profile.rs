use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The profile card shown at the top of the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub bio: String,
    pub avatar_url: String,
    pub html_url: String,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub company: String,
    pub location: String,
}

impl Profile {
    /// Build the card from a `/users/{username}` response. A blank display
    /// name falls back to the login, and a blank profile link falls back to
    /// the canonical GitHub URL for the login.
    pub fn from_api(raw: &Value, username: &str) -> Self {
        let name = raw
            .get("name")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();
        let html_url = raw
            .get("html_url")
            .and_then(|v| v.as_str())
            .unwrap_or("")
            .to_string();

        Profile {
            name: if name.is_empty() {
                username.to_string()
            } else {
                name
            },
            bio: raw
                .get("bio")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            avatar_url: raw
                .get("avatar_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            html_url: if html_url.is_empty() {
                format!("https://github.com/{}", username)
            } else {
                html_url
            },
            followers: raw.get("followers").and_then(|v| v.as_u64()).unwrap_or(0),
            following: raw.get("following").and_then(|v| v.as_u64()).unwrap_or(0),
            public_repos: raw
                .get("public_repos")
                .and_then(|v| v.as_u64())
                .unwrap_or(0),
            company: raw
                .get("company")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            location: raw
                .get("location")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        }
    }
}
