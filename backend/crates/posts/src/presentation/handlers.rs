//! HTTP Handlers
//!
//! Every handler runs behind `require_session`, so the authenticated
//! identity arrives as a `CurrentUser` extension. Handlers never read
//! a user id from the request body or path.

use std::sync::Arc;

use auth::CurrentUser;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use kernel::id::PostId;
use uuid::Uuid;

use crate::application::create_post::{CreatePostInput, CreatePostUseCase};
use crate::application::delete_post::DeletePostUseCase;
use crate::application::likes::LikeUseCase;
use crate::application::list_posts::ListPostsUseCase;
use crate::application::update_post::{UpdatePostInput, UpdatePostUseCase};
use crate::application::view_post::ViewPostUseCase;
use crate::domain::repository::{LikeRepository, PostRepository};
use crate::error::PostError;
use crate::presentation::dto::{
    CreatePostRequest, CreatePostResponse, FeedItemResponse, FeedResponse, LikeCountResponse,
    MessageResponse, PostDetailResponse, PostListResponse, PostResponse, UpdatePostRequest,
};

/// Shared handler state
pub struct PostsAppState<R> {
    pub repo: Arc<R>,
}

impl<R> Clone for PostsAppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

/// POST /
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Json(body): Json<CreatePostRequest>,
) -> Result<Response, PostError>
where
    R: PostRepository + Send + Sync + 'static,
{
    let output = CreatePostUseCase::new(Arc::clone(&state.repo))
        .execute(CreatePostInput {
            user_id: user.user_id,
            content: body.content,
        })
        .await?;

    let response = CreatePostResponse {
        message: "Post created successfully".to_string(),
        post_id: output.post_id,
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// GET /{id}
pub async fn view_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostDetailResponse>, PostError>
where
    R: PostRepository + Send + Sync + 'static,
{
    let post = ViewPostUseCase::new(Arc::clone(&state.repo))
        .execute(PostId::from_uuid(post_id), user.user_id)
        .await?;

    Ok(Json(PostDetailResponse {
        message: "Post retrieved successfully".to_string(),
        post: post.into(),
    }))
}

/// PUT /{id}
pub async fn update_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
    Json(body): Json<UpdatePostRequest>,
) -> Result<Json<MessageResponse>, PostError>
where
    R: PostRepository + Send + Sync + 'static,
{
    UpdatePostUseCase::new(Arc::clone(&state.repo))
        .execute(UpdatePostInput {
            post_id: PostId::from_uuid(post_id),
            user_id: user.user_id,
            content: body.content,
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Post updated successfully".to_string(),
    }))
}

/// DELETE /{id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, PostError>
where
    R: PostRepository + Send + Sync + 'static,
{
    DeletePostUseCase::new(Arc::clone(&state.repo))
        .execute(PostId::from_uuid(post_id), user.user_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}

/// GET /mine
pub async fn list_my_posts<R>(
    State(state): State<PostsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<PostListResponse>, PostError>
where
    R: PostRepository + Send + Sync + 'static,
{
    let posts = ListPostsUseCase::new(Arc::clone(&state.repo))
        .list_mine(user.user_id)
        .await?;

    Ok(Json(PostListResponse {
        message: "Posts retrieved successfully".to_string(),
        posts: posts.into_iter().map(PostResponse::from).collect(),
    }))
}

/// GET /
pub async fn feed<R>(
    State(state): State<PostsAppState<R>>,
) -> Result<Json<FeedResponse>, PostError>
where
    R: PostRepository + Send + Sync + 'static,
{
    let items = ListPostsUseCase::new(Arc::clone(&state.repo)).feed().await?;

    Ok(Json(FeedResponse {
        message: "Posts retrieved successfully".to_string(),
        posts: items.into_iter().map(FeedItemResponse::from).collect(),
    }))
}

/// POST /{id}/like
pub async fn like_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
) -> Result<Response, PostError>
where
    R: LikeRepository + Send + Sync + 'static,
{
    LikeUseCase::new(Arc::clone(&state.repo))
        .like(PostId::from_uuid(post_id), user.user_id)
        .await?;

    let response = MessageResponse {
        message: "Post liked".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)).into_response())
}

/// DELETE /{id}/like
pub async fn unlike_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, PostError>
where
    R: LikeRepository + Send + Sync + 'static,
{
    LikeUseCase::new(Arc::clone(&state.repo))
        .unlike(PostId::from_uuid(post_id), user.user_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Post unliked".to_string(),
    }))
}

/// GET /{id}/likes
pub async fn count_likes<R>(
    State(state): State<PostsAppState<R>>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<LikeCountResponse>, PostError>
where
    R: LikeRepository + Send + Sync + 'static,
{
    let count = LikeUseCase::new(Arc::clone(&state.repo))
        .count(PostId::from_uuid(post_id))
        .await?;

    Ok(Json(LikeCountResponse {
        message: "Like count retrieved successfully".to_string(),
        count,
    }))
}
