use anyhow::Result;
use serde_json::json;
use std::env;

use github_dashboard::services::storage;
use github_dashboard::{
    build_dashboard, generation_timestamp, render_html, DashboardConfig, DashboardError,
    GitHubClient,
};

/// Scheduled refresher: build the dashboard from environment configuration,
/// render it and publish the page to object storage. Prints a small JSON
/// envelope describing the published object; any failure aborts the run
/// with a nonzero exit.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::from_env();
    log::info!(
        "Refreshing dashboard (max {} repositories, {} items per section)",
        config.max_repositories,
        config.max_items_per_section
    );

    let api = GitHubClient::new(config.github_token.clone());
    let dashboard = build_dashboard(&api, &config).await?;
    let generated_at = generation_timestamp();
    let html = render_html(&generated_at, &dashboard);

    // The output target is only required once there is something to write.
    let bucket = env::var("OUTPUT_BUCKET").unwrap_or_default().trim().to_string();
    let key = env::var("OUTPUT_KEY")
        .unwrap_or_else(|_| "index.html".to_string())
        .trim()
        .to_string();
    if bucket.is_empty() {
        return Err(DashboardError::MissingOutputTarget.into());
    }

    storage::upload_html(&bucket, &key, &html).await?;

    let body = json!({
        "message": "Dashboard refreshed",
        "bucket": bucket,
        "key": key,
        "username": dashboard.username,
    });
    println!("{}", json!({ "statusCode": 200, "body": body.to_string() }));

    Ok(())
}
