use anyhow::{bail, Context, Result};
use tracing::info;

/// Load page HTML from a local file path or an http(s) URL.
pub async fn load_html(input: &str) -> Result<String> {
    if input.starts_with("http://") || input.starts_with("https://") {
        fetch_url(input).await
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

async fn fetch_url(url: &str) -> Result<String> {
    let client = reqwest::Client::new();

    info!("Fetching page: {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed for {}", url))?;

    let status = response.status();
    if !status.is_success() {
        bail!("{} returned HTTP {}", url, status);
    }

    let body = response
        .text()
        .await
        .context("Failed to read response body")?;
    info!("Fetched {} bytes", body.len());
    Ok(body)
}
