//! Presentation of evaluated scenarios.
//!
//! Formatting numbers as text happens only here; the processing layer
//! returns plain numeric data.

pub mod chart;
pub mod html;
mod report;

pub use chart::{Axis, ChartData, ChartSeries};
pub use html::render_page;
pub use report::ScenarioReport;
