use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;

/// Publish the rendered page to the configured bucket and key. Credentials
/// and region come from the default provider chain.
pub async fn upload_html(bucket: &str, key: &str, html: &str) -> Result<()> {
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let client = aws_sdk_s3::Client::new(&sdk_config);

    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(html.as_bytes().to_vec()))
        .content_type("text/html; charset=utf-8")
        .send()
        .await
        .with_context(|| format!("failed to upload dashboard to s3://{}/{}", bucket, key))?;

    log::info!("✅ Uploaded dashboard to s3://{}/{}", bucket, key);
    Ok(())
}
