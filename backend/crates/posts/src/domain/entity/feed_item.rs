//! Feed Read Model

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

/// One row of the global feed: a post joined with its author's
/// username and an aggregated like count. Read-only projection, never
/// written back.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub post_id: PostId,
    pub user_id: UserId,
    pub username: String,
    pub content: String,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}
