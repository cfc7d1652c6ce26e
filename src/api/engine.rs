use crate::core::{DataSet, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartPlugin, PluginEvent};
use crate::interaction::{RebuildGate, SelectionController};
use crate::render::Renderer;

use super::{BarChartConfig, ChartLayout};

/// Main orchestration facade consumed by host applications.
///
/// `BarChartEngine` owns the current dataset, the selection state and the
/// renderer. All mutation goes through `&mut self`, which keeps selection
/// changes serialized through a single owner.
pub struct BarChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: BarChartConfig,
    pub(super) data_set: DataSet,
    pub(super) selection: SelectionController,
    pub(super) rebuild_gate: RebuildGate,
    pub(super) last_layout: Option<ChartLayout>,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
}

impl<R: Renderer> BarChartEngine<R> {
    /// Creates an engine with an empty dataset and no selection.
    pub fn new(renderer: R, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            data_set: DataSet::default(),
            selection: SelectionController::new(),
            rebuild_gate: RebuildGate::new(),
            last_layout: None,
            plugins: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Applies a new host measurement. Invalid sizes leave the engine untouched.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if viewport == self.config.viewport {
            return Ok(());
        }
        let mut next = self.config;
        next.viewport = viewport;
        next.validate()?;
        self.config = next;
        self.emit_plugin_event(PluginEvent::ViewportChanged {
            width: viewport.width,
            height: viewport.height,
        });
        Ok(())
    }

    #[must_use]
    pub fn bar_width(&self) -> f64 {
        self.config.bar_width_px
    }

    pub fn set_bar_width(&mut self, bar_width_px: f64) -> ChartResult<()> {
        if !bar_width_px.is_finite() || bar_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        self.config.bar_width_px = bar_width_px;
        Ok(())
    }

    /// Handle on the rebuild guard, shared with host callbacks that must not
    /// start a nested pass.
    #[must_use]
    pub fn rebuild_gate(&self) -> RebuildGate {
        self.rebuild_gate.clone()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
