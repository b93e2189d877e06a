//! Like Use Cases
//!
//! Like uniqueness lives in the storage constraint alone. There is no
//! read-before-write here; two racing likes resolve to one row and one
//! conflict.

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::LikeRepository;
use crate::error::{PostError, PostResult};

/// Like / unlike / count use case
pub struct LikeUseCase<L>
where
    L: LikeRepository,
{
    like_repo: Arc<L>,
}

impl<L> LikeUseCase<L>
where
    L: LikeRepository,
{
    pub fn new(like_repo: Arc<L>) -> Self {
        Self { like_repo }
    }

    /// Record a like. Duplicate → `AlreadyLiked`; unknown post id
    /// surfaces the foreign key violation as a conflict.
    pub async fn like(&self, post_id: PostId, user_id: UserId) -> PostResult<()> {
        self.like_repo.insert(post_id, user_id).await?;

        tracing::info!(post_id = %post_id, user_id = %user_id, "Post liked");
        Ok(())
    }

    /// Remove a like. Nothing to remove → `LikeNotFound`.
    pub async fn unlike(&self, post_id: PostId, user_id: UserId) -> PostResult<()> {
        let deleted = self.like_repo.delete(post_id, user_id).await?;
        if deleted == 0 {
            return Err(PostError::LikeNotFound);
        }

        tracing::info!(post_id = %post_id, user_id = %user_id, "Post unliked");
        Ok(())
    }

    /// Count likes on a post. An unknown post simply counts to zero.
    pub async fn count(&self, post_id: PostId) -> PostResult<i64> {
        self.like_repo.count_for_post(post_id).await
    }
}
