use crate::extensions::PluginContext;
use crate::render::Renderer;

use super::{BarChartEngine, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            viewport: self.config.viewport,
            elements_len: self.data_set.len(),
            max_value: self.max_value(),
            selection: self.selection.current().cloned(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(&event, &context);
        }
    }
}
