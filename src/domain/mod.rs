//! Records as fetched from the data source and the rows derived from them.

pub mod customer;
pub mod product;
pub mod order;
mod wire;

pub use customer::*;
pub use product::*;
pub use order::*;
