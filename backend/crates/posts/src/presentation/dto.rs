//! Request / Response DTOs

use chrono::{DateTime, Utc};
use kernel::id::PostId;
use serde::{Deserialize, Serialize};

use crate::domain::entity::{feed_item::FeedItem, post::Post};

/// Create post request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub content: String,
}

/// Create post response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostResponse {
    pub message: String,
    pub post_id: PostId,
}

/// Update post request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub content: String,
}

/// A single post owned by the caller
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: PostId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Envelope for a single-post read
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailResponse {
    pub message: String,
    pub post: PostResponse,
}

/// Envelope for the caller's own post listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostListResponse {
    pub message: String,
    pub posts: Vec<PostResponse>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id,
            content: post.content.as_str().to_string(),
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// One feed row
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItemResponse {
    pub post_id: PostId,
    pub username: String,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<FeedItem> for FeedItemResponse {
    fn from(item: FeedItem) -> Self {
        Self {
            post_id: item.post_id,
            username: item.username,
            content: item.content,
            like_count: item.like_count,
            created_at: item.created_at,
        }
    }
}

/// Envelope for the global feed
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedResponse {
    pub message: String,
    pub posts: Vec<FeedItemResponse>,
}

/// Like count response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeCountResponse {
    pub message: String,
    pub count: i64,
}

/// Plain message response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::id::UserId;

    fn sample_post() -> PostResponse {
        PostResponse {
            post_id: PostId::new(),
            content: "hello".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // Every read endpoint answers with `message` plus its payload,
    // matching the write endpoints
    #[test]
    fn test_read_responses_carry_message_envelope() {
        let detail = serde_json::to_value(PostDetailResponse {
            message: "Post retrieved successfully".to_string(),
            post: sample_post(),
        })
        .unwrap();
        assert_eq!(detail["message"], "Post retrieved successfully");
        assert!(detail["post"]["postId"].is_string());
        assert_eq!(detail["post"]["content"], "hello");

        let list = serde_json::to_value(PostListResponse {
            message: "Posts retrieved successfully".to_string(),
            posts: vec![sample_post()],
        })
        .unwrap();
        assert!(list["message"].is_string());
        assert_eq!(list["posts"].as_array().unwrap().len(), 1);

        let feed = serde_json::to_value(FeedResponse {
            message: "Posts retrieved successfully".to_string(),
            posts: vec![FeedItemResponse {
                post_id: PostId::new(),
                username: "alice".to_string(),
                content: "hello".to_string(),
                like_count: 0,
                created_at: Utc::now(),
            }],
        })
        .unwrap();
        assert!(feed["message"].is_string());
        assert_eq!(feed["posts"][0]["username"], "alice");
        assert_eq!(feed["posts"][0]["likeCount"], 0);

        let count = serde_json::to_value(LikeCountResponse {
            message: "Like count retrieved successfully".to_string(),
            count: 3,
        })
        .unwrap();
        assert!(count["message"].is_string());
        assert_eq!(count["count"], 3);
    }

    #[test]
    fn test_post_response_from_entity() {
        let post = Post::new(
            UserId::new(),
            crate::domain::value_object::content::PostContent::new("body").unwrap(),
        );
        let response = PostResponse::from(post.clone());
        assert_eq!(response.post_id, post.post_id);
        assert_eq!(response.content, "body");
    }
}
