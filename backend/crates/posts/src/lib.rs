//! Posts Backend Module
//!
//! Post CRUD, the global feed, and likes. Same layered structure as
//! the auth module:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Authorization Model
//! Every route sits behind the auth session guard. Mutations and
//! single-post reads are scoped to the owner inside the SQL predicate;
//! a request against another user's post is answered exactly like one
//! against a post that does not exist.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use error::{PostError, PostResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::{posts_router, posts_router_generic};
