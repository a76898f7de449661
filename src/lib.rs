//! GitHub activity dashboard generator.
//!
//! The library collects a user's repositories, open pull requests and
//! issues from the GitHub API, summarizes them into a single dashboard
//! document, and renders that document as a self-contained HTML page.
//! Two thin binaries drive it: `dashboard-refresher` publishes the page
//! to object storage and `dashboard-query` answers a JSON query on stdin
//! with the document on stdout.

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::DashboardError;
pub use models::dashboard::{Dashboard, LanguageCount, Summary};
pub use models::issue::SearchItem;
pub use models::profile::Profile;
pub use models::repository::{Repository, Visibility};
pub use services::dashboard::{build_dashboard, generation_timestamp};
pub use services::github::{GitHubApi, GitHubClient};
pub use services::renderer::render_html;
pub use utils::config::DashboardConfig;
