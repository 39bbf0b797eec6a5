//! Pure transformations from fetched records to display-ready rows.
//!
//! Nothing in here does I/O or fails: unusable field values degrade to sentinel
//! strings instead of failing the row.

pub mod columns;
pub mod customers;
pub mod dates;
pub mod fetch_state;
pub mod orders;
pub mod pagination;
pub mod status_map;

pub use columns::*;
pub use customers::*;
pub use fetch_state::*;
pub use orders::*;
pub use pagination::*;
pub use status_map::*;
