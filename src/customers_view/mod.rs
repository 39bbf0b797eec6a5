//! State behind the customers page: pagination and the last fetch.

mod actions;
pub mod entity;

pub use actions::*;
pub use entity::*;
