//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Shared read-only state for the report server
//! - [`Scenario`]: Evaluated costs for one batch size
//! - [`Architecture`]: CPU architecture a function is billed under

mod state;
mod types;

pub use state::AppState;
pub use types::{Architecture, HeadlineFigures, Scenario, VolumeCost};
