use anyhow::Result;
use serde_json::{json, Value};
use std::io::Read;
use std::process::ExitCode;

use github_dashboard::{
    build_dashboard, generation_timestamp, DashboardConfig, GitHubClient,
};

/// One-shot data source: read a JSON query from stdin, build the dashboard
/// and print `{"dashboard_json": ..., "generated_at": ...}` on stdout.
/// Failures print `{"error": ...}` on stdout and exit nonzero, so callers
/// that only parse stdout still see what went wrong.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{}", json!({ "error": err.to_string() }));
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let query: Value = if input.trim().is_empty() {
        json!({})
    } else {
        serde_json::from_str(input.trim())?
    };

    let config = DashboardConfig::from_query(&query);
    let api = GitHubClient::new(config.github_token.clone());
    let dashboard = build_dashboard(&api, &config).await?;

    let result = json!({
        "dashboard_json": serde_json::to_string(&dashboard)?,
        "generated_at": generation_timestamp(),
    });
    println!("{}", result);

    Ok(())
}
