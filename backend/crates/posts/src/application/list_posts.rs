//! List Posts Use Cases
//!
//! Two listings: the caller's own posts and the global feed. Both are
//! plain reads with no pagination, newest first.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::{feed_item::FeedItem, post::Post};
use crate::domain::repository::PostRepository;
use crate::error::PostResult;

/// List posts use case
pub struct ListPostsUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ListPostsUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    /// The caller's own posts, newest first
    pub async fn list_mine(&self, user_id: UserId) -> PostResult<Vec<Post>> {
        self.post_repo.list_by_user(user_id).await
    }

    /// Everyone's posts with author usernames and like counts, newest
    /// first
    pub async fn feed(&self) -> PostResult<Vec<FeedItem>> {
        self.post_repo.list_feed().await
    }
}
