//! Application Layer

pub mod create_post;
pub mod delete_post;
pub mod likes;
pub mod list_posts;
pub mod update_post;
pub mod view_post;

pub use create_post::{CreatePostInput, CreatePostOutput, CreatePostUseCase};
pub use delete_post::DeletePostUseCase;
pub use likes::LikeUseCase;
pub use list_posts::ListPostsUseCase;
pub use update_post::{UpdatePostInput, UpdatePostUseCase};
pub use view_post::ViewPostUseCase;
