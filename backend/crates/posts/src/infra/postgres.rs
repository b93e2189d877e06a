//! PostgreSQL Repository Implementations
//!
//! One parameterized statement per method. Ownership checks live in
//! the WHERE clause, so a statement on someone else's post simply
//! matches zero rows.

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{feed_item::FeedItem, post::Post};
use crate::domain::repository::{LikeRepository, PostRepository};
use crate::domain::value_object::content::PostContent;
use crate::error::{PostError, PostResult};

/// PostgreSQL-backed posts repository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map a like-insert failure: duplicate key is `AlreadyLiked`, foreign
/// key violations pass through for the kernel's conflict mapping.
fn map_like_insert_error(err: sqlx::Error) -> PostError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return PostError::AlreadyLiked;
        }
    }
    PostError::Database(err)
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (post_id, user_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(post.content.as_str())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_owned(&self, post_id: PostId, user_id: UserId) -> PostResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, content, created_at, updated_at
            FROM posts
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PostRow::into_post))
    }

    async fn update_owned(
        &self,
        post_id: PostId,
        user_id: UserId,
        content: &PostContent,
        updated_at: DateTime<Utc>,
    ) -> PostResult<u64> {
        let updated = sqlx::query(
            r#"
            UPDATE posts
            SET content = $3, updated_at = $4
            WHERE post_id = $1 AND user_id = $2
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(content.as_str())
        .bind(updated_at)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated)
    }

    async fn delete_owned(&self, post_id: PostId, user_id: UserId) -> PostResult<u64> {
        // Likes reference posts with ON DELETE CASCADE
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1 AND user_id = $2")
            .bind(post_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn list_by_user(&self, user_id: UserId) -> PostResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT post_id, user_id, content, created_at, updated_at
            FROM posts
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PostRow::into_post).collect())
    }

    async fn list_feed(&self) -> PostResult<Vec<FeedItem>> {
        let rows = sqlx::query_as::<_, FeedRow>(
            r#"
            SELECT
                p.post_id,
                p.user_id,
                u.username,
                p.content,
                (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.post_id) AS like_count,
                p.created_at
            FROM posts p
            JOIN users u ON u.user_id = p.user_id
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FeedRow::into_feed_item).collect())
    }
}

// ============================================================================
// Like Repository Implementation
// ============================================================================

impl LikeRepository for PgPostRepository {
    async fn insert(&self, post_id: PostId, user_id: UserId) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO likes (user_id, post_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(post_id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(map_like_insert_error)?;

        Ok(())
    }

    async fn delete(&self, post_id: PostId, user_id: UserId) -> PostResult<u64> {
        let deleted = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND post_id = $2")
            .bind(user_id.as_uuid())
            .bind(post_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted)
    }

    async fn count_for_post(&self, post_id: PostId) -> PostResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM likes WHERE post_id = $1")
                .bind(post_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    user_id: Uuid,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            content: PostContent::from_storage(self.content),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct FeedRow {
    post_id: Uuid,
    user_id: Uuid,
    username: String,
    content: String,
    like_count: i64,
    created_at: DateTime<Utc>,
}

impl FeedRow {
    fn into_feed_item(self) -> FeedItem {
        FeedItem {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            username: self.username,
            content: self.content,
            like_count: self.like_count,
            created_at: self.created_at,
        }
    }
}
