//! Posts Router
//!
//! Every route is wrapped in the session guard; the guard rejects the
//! request before any post or like logic runs.

use std::sync::Arc;

use auth::domain::repository::SessionRepository;
use auth::{AuthConfig, AuthGuardState, PgAuthRepository, require_session};
use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;

use crate::domain::repository::{LikeRepository, PostRepository};
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Build the posts router backed by PostgreSQL
pub fn posts_router(pool: PgPool, config: Arc<AuthConfig>) -> Router {
    let repo = Arc::new(PgPostRepository::new(pool.clone()));
    let guard = AuthGuardState {
        session_repo: Arc::new(PgAuthRepository::new(pool)),
        config,
    };
    posts_router_generic(repo, guard)
}

/// Build the posts router over any repository implementations
pub fn posts_router_generic<R, S>(repo: Arc<R>, guard: AuthGuardState<S>) -> Router
where
    R: PostRepository + LikeRepository + Send + Sync + 'static,
    S: SessionRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState { repo };

    Router::new()
        .route(
            "/",
            post(handlers::create_post::<R>).get(handlers::feed::<R>),
        )
        .route("/mine", get(handlers::list_my_posts::<R>))
        .route(
            "/{id}",
            get(handlers::view_post::<R>)
                .put(handlers::update_post::<R>)
                .delete(handlers::delete_post::<R>),
        )
        .route(
            "/{id}/like",
            post(handlers::like_post::<R>).delete(handlers::unlike_post::<R>),
        )
        .route("/{id}/likes", get(handlers::count_likes::<R>))
        .layer(axum::middleware::from_fn(move |req, next| {
            require_session(guard.clone(), req, next)
        }))
        .with_state(state)
}
