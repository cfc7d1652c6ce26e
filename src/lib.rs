//! bar-chart-kit: host-agnostic grouped bar chart core.
//!
//! The crate computes bar heights against a shared scale, tracks a single
//! selected group and places an optional limit line. Drawing is delegated to
//! a `render::Renderer` implementation supplied by the host toolkit.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{BarChartConfig, BarChartEngine};
pub use error::{ChartError, ChartResult};
