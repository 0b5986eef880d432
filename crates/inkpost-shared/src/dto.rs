//! Data Transfer Objects - request/response types for the post store API.

use serde::{Deserialize, Serialize};

/// Request to create a new post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
    pub author: String,
}

/// A stored post as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDto {
    pub title: String,
    pub author: String,
    pub body: String,
    /// Nanoseconds since the Unix epoch, assigned by the store.
    pub timestamp: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_dto_reads_store_json() {
        let json = r#"[{"title":"Hello","author":"Ann","body":"<p>Hi</p>","timestamp":1704412800000000000}]"#;
        let posts: Vec<PostDto> = serde_json::from_str(json).unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, "Ann");
        assert_eq!(posts[0].timestamp, 1_704_412_800_000_000_000);
    }

    #[test]
    fn test_create_request_field_names() {
        let request = CreatePostRequest {
            title: "Hello".to_string(),
            body: "<p>Hi</p>".to_string(),
            author: "Ann".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["title"], "Hello");
        assert_eq!(value["body"], "<p>Hi</p>");
        assert_eq!(value["author"], "Ann");
    }
}
