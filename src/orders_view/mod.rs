//! State behind the orders page: pagination, the last fetch, and the status
//! selections.

mod actions;
pub mod entity;

pub use actions::*;
pub use entity::*;
