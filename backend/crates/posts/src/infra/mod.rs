//! Infrastructure Layer

pub mod postgres;
