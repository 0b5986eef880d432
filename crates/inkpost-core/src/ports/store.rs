use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Post store - abstraction over the remote storage service.
///
/// Exactly one attempt per call; implementations never retry.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Create a post. The store assigns its timestamp.
    async fn submit(&self, title: &str, body: &str, author: &str) -> Result<(), StoreError>;

    /// Fetch every stored post, in the order the store returns them.
    async fn fetch_all(&self) -> Result<Vec<Post>, StoreError>;
}
