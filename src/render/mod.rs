//! Plain-text stand-in for the dashboard's table widget.

mod table;

pub use table::*;
