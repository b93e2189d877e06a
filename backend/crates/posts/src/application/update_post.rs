//! Update Post Use Case

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{PostId, UserId};

use crate::domain::repository::PostRepository;
use crate::domain::value_object::content::PostContent;
use crate::error::{PostError, PostResult};

/// Update post input
pub struct UpdatePostInput {
    pub post_id: PostId,
    pub user_id: UserId,
    pub content: String,
}

/// Update post use case
pub struct UpdatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> UpdatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: UpdatePostInput) -> PostResult<()> {
        let content = PostContent::new(input.content).map_err(PostError::Validation)?;

        // The statement matches post_id AND user_id together. A post
        // someone else owns and a post that never existed both land
        // here with zero rows.
        let updated = self
            .post_repo
            .update_owned(input.post_id, input.user_id, &content, Utc::now())
            .await?;
        if updated == 0 {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(post_id = %input.post_id, user_id = %input.user_id, "Post updated");
        Ok(())
    }
}
