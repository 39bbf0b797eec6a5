//! System orchestration, startup, and shutdown logic.

pub mod dashboard;
pub mod telemetry;
pub mod error;

pub use dashboard::*;
pub use telemetry::*;
pub use error::*;
