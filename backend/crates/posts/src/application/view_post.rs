//! View Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

/// View post use case. Only the owner sees the post; anyone else gets
/// the same not-found as for an id that never existed.
pub struct ViewPostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> ViewPostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, post_id: PostId, user_id: UserId) -> PostResult<Post> {
        self.post_repo
            .find_owned(post_id, user_id)
            .await?
            .ok_or(PostError::PostNotFound)
    }
}
