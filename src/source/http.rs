use crate::model::{Chapter, ChapterDetail, ChapterId, OpId, Snapshot};
use crate::routing::Endpoint;
use crate::source::{CacheSource, SourceError};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// `CacheSource` backed by the cache server's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpCacheSource {
    client: Client,
    base_url: String, // No trailing slash
}

impl HttpCacheSource {
    pub fn new(base_url: Url, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Issue one GET and parse the body against the data contract.
    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, SourceError> {
        let url = self.url_for(&endpoint);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound { url });
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Unreachable {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|source| SourceError::ShapeMismatch { url, source })
    }
}

#[async_trait::async_trait]
impl CacheSource for HttpCacheSource {
    async fn list_chapters(&self) -> Result<Vec<Chapter>, SourceError> {
        self.fetch_json(Endpoint::Chapters).await
    }

    async fn get_chapter_detail(&self, ch: ChapterId) -> Result<ChapterDetail, SourceError> {
        self.fetch_json(Endpoint::ChapterDetail { ch }).await
    }

    async fn get_snapshot(&self, ch: ChapterId, op: OpId) -> Result<Snapshot, SourceError> {
        self.fetch_json(Endpoint::Snapshot { ch, op }).await
    }

    fn origin(&self) -> String {
        self.base_url.clone()
    }
}
