//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer; tests substitute in-memory fakes.
//!
//! Ownership is enforced inside the statement: mutating methods take
//! both the post id and the caller's user id and report how many rows
//! matched. Zero rows means "not yours or not there", with no way to
//! tell which.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

use crate::domain::entity::{feed_item::FeedItem, post::Post};
use crate::domain::value_object::content::PostContent;
use crate::error::PostResult;

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Persist a new post
    async fn create(&self, post: &Post) -> PostResult<()>;

    /// Load a post only if `user_id` owns it
    async fn find_owned(&self, post_id: PostId, user_id: UserId) -> PostResult<Option<Post>>;

    /// Rewrite the content of a post the caller owns; returns the
    /// number of rows matched
    async fn update_owned(
        &self,
        post_id: PostId,
        user_id: UserId,
        content: &PostContent,
        updated_at: DateTime<Utc>,
    ) -> PostResult<u64>;

    /// Delete a post the caller owns; returns the number of rows
    /// matched. Likes on the post go with it.
    async fn delete_owned(&self, post_id: PostId, user_id: UserId) -> PostResult<u64>;

    /// All posts by one user, newest first
    async fn list_by_user(&self, user_id: UserId) -> PostResult<Vec<Post>>;

    /// The global feed, newest first, with author usernames and like
    /// counts resolved
    async fn list_feed(&self) -> PostResult<Vec<FeedItem>>;
}

/// Like repository trait
#[trait_variant::make(LikeRepository: Send)]
pub trait LocalLikeRepository {
    /// Record a like. A duplicate surfaces as `AlreadyLiked` from the
    /// storage constraint; there is no check-then-insert.
    async fn insert(&self, post_id: PostId, user_id: UserId) -> PostResult<()>;

    /// Remove a like; returns the number of rows removed
    async fn delete(&self, post_id: PostId, user_id: UserId) -> PostResult<u64>;

    /// Count likes on a post
    async fn count_for_post(&self, post_id: PostId) -> PostResult<i64>;
}
