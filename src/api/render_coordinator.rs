use tracing::trace;

use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::{BarChartEngine, ChartLayout, PluginEvent, build_render_frame, compute_layout};

impl<R: Renderer> BarChartEngine<R> {
    /// Layout for the current dataset, viewport, bar width and selection.
    pub fn compute_layout(&self) -> ChartResult<ChartLayout> {
        compute_layout(
            &self.data_set,
            self.selection.state(),
            self.config.plot_height(),
            self.config.bar_width_px,
        )
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        let layout = self.compute_layout()?;
        Ok(build_render_frame(&layout, &self.config))
    }

    /// Layout used by the most recent completed rebuild.
    #[must_use]
    pub fn last_layout(&self) -> Option<&ChartLayout> {
        self.last_layout.as_ref()
    }

    /// Runs one full pass: optional default selection, geometry, colors, draw.
    ///
    /// A default selection applied here does not emit `SelectionChanged`.
    ///
    /// Returns `Ok(false)` when another pass is already running; the nested
    /// request is dropped because the running pass reads the latest state.
    pub fn rebuild(&mut self) -> ChartResult<bool> {
        self.run_rebuild_pass(|renderer, frame| renderer.render(frame))
    }

    pub fn render(&mut self) -> ChartResult<()> {
        self.rebuild().map(|_| ())
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<bool>
    where
        R: crate::render::CairoContextRenderer,
    {
        self.run_rebuild_pass(|renderer, frame| renderer.render_on_cairo_context(context, frame))
    }

    fn run_rebuild_pass<F>(&mut self, draw: F) -> ChartResult<bool>
    where
        F: FnOnce(&mut R, &RenderFrame) -> ChartResult<()>,
    {
        let Some(_pass) = self.rebuild_gate.try_enter() else {
            trace!("dropping re-entrant rebuild request");
            return Ok(false);
        };

        if self.config.auto_select_default_on_rebuild {
            self.selection.auto_select_default(&self.data_set);
        }

        let layout = self.compute_layout()?;
        let frame = build_render_frame(&layout, &self.config);
        trace!(
            elements = layout.elements.len(),
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "rebuild pass"
        );
        draw(&mut self.renderer, &frame)?;
        self.last_layout = Some(layout);
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(true)
    }
}
