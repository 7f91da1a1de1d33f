//! Server HTTP handlers.

mod analyze;
mod status;

pub use analyze::analyze_handler;
pub use status::{health_handler, test_handler};
