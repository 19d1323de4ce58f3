//! Domain Layer
//!
//! Records owned by the backend, the role value object, authorization
//! guards and repository traits.

pub mod entity;
pub mod guard;
pub mod repository;
pub mod value_object;
