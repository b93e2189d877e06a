//! Post Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::value_object::content::PostContent;

/// Post entity. The owner is fixed at creation; every mutation is
/// scoped to `post_id` and `user_id` together.
#[derive(Debug, Clone)]
pub struct Post {
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: PostContent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by `user_id`
    pub fn new(user_id: UserId, content: PostContent) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            user_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}
