use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Create a configured HTTP client for making requests to the GitHub API
pub fn create_http_client() -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(30))
        .user_agent("github-dashboard/1.0.0")
        .build()
        .expect("Failed to create HTTP client")
}
