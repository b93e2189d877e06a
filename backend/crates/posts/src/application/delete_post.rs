//! Delete Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// Delete post use case
pub struct DeletePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> DeletePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: PostId, user_id: UserId) -> PostResult<()> {
        let deleted = self.post_repo.delete_owned(post_id, user_id).await?;
        if deleted == 0 {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(post_id = %post_id, user_id = %user_id, "Post deleted");
        Ok(())
    }
}
