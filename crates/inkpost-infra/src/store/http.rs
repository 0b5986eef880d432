//! Remote post store over HTTP.
//!
//! `POST {base}/posts` creates a post, `GET {base}/posts` lists them.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};

use inkpost_core::StoreError;
use inkpost_core::domain::Post;
use inkpost_core::ports::PostStore;
use inkpost_shared::{CreatePostRequest, PostDto};

/// Remote store configuration.
#[derive(Debug, Clone)]
pub struct HttpStoreConfig {
    /// Base URL of the store (e.g., http://localhost:4943/api)
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl HttpStoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP-backed post store. One request per call, no retries.
pub struct HttpPostStore {
    client: Client,
    posts_url: String,
}

impl HttpPostStore {
    pub fn new(config: &HttpStoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let posts_url = posts_url(&config.base_url);
        tracing::info!(url = %posts_url, "Using remote post store");

        Ok(Self { client, posts_url })
    }

    /// Map a non-success status to `StoreError::Rejected`.
    async fn check(response: Response) -> Result<Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(StoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

fn posts_url(base_url: &str) -> String {
    format!("{}/posts", base_url.trim_end_matches('/'))
}

fn into_post(dto: PostDto) -> Post {
    Post::new(dto.title, dto.author, dto.body, dto.timestamp)
}

#[async_trait]
impl PostStore for HttpPostStore {
    async fn submit(&self, title: &str, body: &str, author: &str) -> Result<(), StoreError> {
        let request = CreatePostRequest {
            title: title.to_string(),
            body: body.to_string(),
            author: author.to_string(),
        };

        let response = self
            .client
            .post(&self.posts_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Self::check(response).await?;

        tracing::debug!(url = %self.posts_url, "Post created");
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Post>, StoreError> {
        let response = self
            .client
            .get(&self.posts_url)
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let response = Self::check(response).await?;

        let text = response
            .text()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        let posts: Vec<PostDto> =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(posts.into_iter().map(into_post).collect())
    }
}
