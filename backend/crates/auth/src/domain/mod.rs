//! Domain Layer

pub mod entity {
    pub mod session;
    pub mod user;
}
pub mod repository;
pub mod value_object {
    pub mod email;
    pub mod username;
}
