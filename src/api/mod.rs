mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod layout;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod render_frame_builder;

pub use crate::extensions::{ChartPlugin, PluginContext, PluginEvent};
pub use engine::BarChartEngine;
pub use engine_config::BarChartConfig;
pub use engine_snapshot::EngineSnapshot;
pub use layout::{
    BarLayout, ChartLayout, ColumnGeometry, ElementLayout, LimitLayout, column_geometry,
    compute_layout, element_index_at,
};
pub use render_frame_builder::build_render_frame;
