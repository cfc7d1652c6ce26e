//! Optional feature modules live here.
//!
//! Extensions observe the engine through events and never reach into core
//! state directly.

pub mod plugins;

pub use plugins::{ChartPlugin, PluginContext, PluginEvent, SelectionListener};
