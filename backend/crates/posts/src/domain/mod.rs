//! Domain Layer

pub mod entity {
    pub mod feed_item;
    pub mod post;
}

pub mod repository;

pub mod value_object {
    pub mod content;
}
