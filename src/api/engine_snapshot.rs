use serde::{Deserialize, Serialize};

use crate::core::{ElementRef, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{BarChartEngine, ChartLayout};

/// Deterministic state snapshot used by regression tests and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub bar_width: f64,
    pub max_value: f64,
    pub selection: Option<ElementRef>,
    pub layout: ChartLayout,
}

impl<R: Renderer> BarChartEngine<R> {
    pub fn snapshot(&self) -> ChartResult<EngineSnapshot> {
        Ok(EngineSnapshot {
            viewport: self.config.viewport,
            bar_width: self.config.bar_width_px,
            max_value: self.max_value(),
            selection: self.selection.current().cloned(),
            layout: self.compute_layout()?,
        })
    }
}
