use thiserror::Error;

/// Failures the aggregation pipeline can surface. Any one of them aborts
/// the run; there is no partial dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("could not resolve a GitHub username; configure a profile URL or username, or supply a token")]
    UsernameResolution,

    #[error("GitHub API request to {url} failed: {detail}")]
    UpstreamFetch {
        url: String,
        /// HTTP status code, when the upstream answered at all.
        status: Option<u16>,
        detail: String,
    },

    #[error("no output target configured; OUTPUT_BUCKET is required")]
    MissingOutputTarget,
}
