//! In-memory post store - used when no remote store is configured.
//!
//! Acts as the store itself, so it assigns creation timestamps.
//! Note: Posts are lost on process restart.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use inkpost_core::StoreError;
use inkpost_core::domain::Post;
use inkpost_core::ports::PostStore;

/// In-memory post store keeping posts in insertion order.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
    fail_next_submit: AtomicBool,
    fail_next_fetch: AtomicBool,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            fail_next_submit: AtomicBool::new(false),
            fail_next_fetch: AtomicBool::new(false),
        }
    }

    /// Store pre-populated with `posts`, kept in the given order.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
            ..Self::new()
        }
    }

    /// Make the next `submit` fail with a connection error.
    pub fn fail_next_submit(&self) {
        self.fail_next_submit.store(true, Ordering::SeqCst);
    }

    /// Make the next `fetch_all` fail with a connection error.
    pub fn fail_next_fetch(&self) {
        self.fail_next_fetch.store(true, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    /// Timestamps never repeat, even within one clock tick.
    fn next_timestamp(posts: &[Post]) -> i64 {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        match posts.iter().map(|p| p.timestamp).max() {
            Some(last) if last >= now => last.saturating_add(1),
            _ => now,
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn submit(&self, title: &str, body: &str, author: &str) -> Result<(), StoreError> {
        if self.fail_next_submit.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Connection("injected submit failure".to_string()));
        }

        let mut posts = self.posts.write().await;
        let timestamp = Self::next_timestamp(&posts);
        posts.push(Post::new(title, author, body, timestamp));

        tracing::debug!(count = posts.len(), timestamp, "Post stored");
        Ok(())
    }

    async fn fetch_all(&self) -> Result<Vec<Post>, StoreError> {
        if self.fail_next_fetch.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Connection("injected fetch failure".to_string()));
        }

        Ok(self.posts.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_then_fetch() {
        let store = InMemoryPostStore::new();
        store.submit("Hello", "<p>Hi</p>", "Ann").await.unwrap();

        let posts = store.fetch_all().await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello");
        assert_eq!(posts[0].body, "<p>Hi</p>");
        assert_eq!(posts[0].author, "Ann");
        assert!(posts[0].timestamp > 0);
    }

    #[tokio::test]
    async fn test_timestamps_strictly_increase() {
        let store = InMemoryPostStore::new();
        for i in 0..5 {
            store.submit(&format!("post {i}"), "", "Ann").await.unwrap();
        }

        let posts = store.fetch_all().await.unwrap();
        assert!(posts.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
    }

    #[tokio::test]
    async fn test_keeps_given_order() {
        let store = InMemoryPostStore::with_posts(vec![
            Post::new("B", "x", "", 2),
            Post::new("A", "x", "", 1),
        ]);

        let titles: Vec<_> = store
            .fetch_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let store = InMemoryPostStore::new();
        store.submit("Same", "<p>x</p>", "Ann").await.unwrap();
        store.submit("Same", "<p>x</p>", "Ann").await.unwrap();

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_injected_failures_fire_once() {
        let store = InMemoryPostStore::new();

        store.fail_next_submit();
        assert!(store.submit("Hello", "", "Ann").await.is_err());
        assert!(store.is_empty().await);
        assert!(store.submit("Hello", "", "Ann").await.is_ok());

        store.fail_next_fetch();
        assert!(matches!(
            store.fetch_all().await,
            Err(StoreError::Connection(_))
        ));
        assert_eq!(store.fetch_all().await.unwrap().len(), 1);
    }
}
