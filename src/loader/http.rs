use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use reqwest::Client;
use std::time::Duration;

use crate::error::{AutocompleteError, Result};
use crate::loader::DatasetSource;

/// Published dataset of US universities
pub const DEFAULT_DATASET_URL: &str = "https://www.sunny-jay.com/us_universities_detailed.csv";

/// Remote CSV dataset
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create new HTTP source
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        tracing::debug!("Fetching dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AutocompleteError::DatasetFetch {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        Ok(response.text().await?)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
