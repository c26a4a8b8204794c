//! Configuration module for the fx-lens application.

pub mod api;
pub mod app;
pub mod chart;

mod debug; // Private; files must use crate::config::DEBUG_FLAGS.
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use api::FRANKFURTER;
pub use app::AppConfig;
pub use chart::CHART;
