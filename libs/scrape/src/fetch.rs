use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("not a valid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// One client for the whole process; reqwest pools connections internally.
pub fn build_client(timeout_seconds: u64, user_agent: &str) -> Client {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent)
        .build()
        .unwrap()
}

pub fn validate_url(url: &str) -> Result<Url, ScrapeError> {
    Ok(Url::parse(url)?)
}

/// Fetches the page body as a string. Non-success statuses are errors, so
/// callers never analyze a 404 page by accident.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let url = validate_url(url)?;
    let response = client.get(url).send().await?.error_for_status()?;
    Ok(response.text().await?)
}
