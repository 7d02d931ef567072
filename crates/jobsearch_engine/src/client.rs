use std::time::Duration;

use futures_util::StreamExt;
use jobsearch_core::{JobRecord, SearchKey};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use search_logging::search_debug;
use serde::Serialize;
use url::Url;

use crate::{FailureKind, SearchError};

/// Search endpoint used when no other is configured.
pub const DEFAULT_ENDPOINT: &str = "https://found-it-server.vercel.app/search-jobs";

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

impl SearchSettings {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
pub trait SearchClient: Send + Sync {
    async fn search(&self, key: &SearchKey) -> Result<Vec<JobRecord>, SearchError>;
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    job_title: &'a str,
    job_location: &'a str,
}

#[derive(Debug, Clone)]
pub struct ReqwestSearchClient {
    settings: SearchSettings,
}

impl ReqwestSearchClient {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SearchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(self.settings.redirect_limit))
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl SearchClient for ReqwestSearchClient {
    async fn search(&self, key: &SearchKey) -> Result<Vec<JobRecord>, SearchError> {
        let endpoint = Url::parse(&self.settings.endpoint)
            .map_err(|err| SearchError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let body = serde_json::to_vec(&SearchRequest {
            job_title: &key.role,
            job_location: &key.location,
        })
        .map_err(|err| SearchError::new(FailureKind::Encode, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // Error bodies are never parsed.
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(SearchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let jobs: Vec<JobRecord> = serde_json::from_slice(&bytes)
            .map_err(|err| SearchError::new(FailureKind::Decode, err.to_string()))?;
        search_debug!("{} job(s) for {} ({} bytes)", jobs.len(), key, bytes.len());
        Ok(jobs)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
