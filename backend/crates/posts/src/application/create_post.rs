//! Create Post Use Case

use std::sync::Arc;

use kernel::id::{PostId, UserId};

use crate::domain::entity::post::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_object::content::PostContent;
use crate::error::{PostError, PostResult};

/// Create post input
pub struct CreatePostInput {
    pub user_id: UserId,
    pub content: String,
}

/// Create post output
#[derive(Debug)]
pub struct CreatePostOutput {
    pub post_id: PostId,
}

/// Create post use case
pub struct CreatePostUseCase<P>
where
    P: PostRepository,
{
    post_repo: Arc<P>,
}

impl<P> CreatePostUseCase<P>
where
    P: PostRepository,
{
    pub fn new(post_repo: Arc<P>) -> Self {
        Self { post_repo }
    }

    pub async fn execute(&self, input: CreatePostInput) -> PostResult<CreatePostOutput> {
        let content = PostContent::new(input.content).map_err(PostError::Validation)?;

        let post = Post::new(input.user_id, content);
        self.post_repo.create(&post).await?;

        tracing::info!(post_id = %post.post_id, user_id = %post.user_id, "Post created");

        Ok(CreatePostOutput {
            post_id: post.post_id,
        })
    }
}
