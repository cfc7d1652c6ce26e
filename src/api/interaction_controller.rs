use crate::core::{DataElement, ElementRef};
use crate::interaction::SelectionState;
use crate::render::Renderer;

use super::{BarChartEngine, PluginEvent, element_index_at};

impl<R: Renderer> BarChartEngine<R> {
    #[must_use]
    pub fn current_selection(&self) -> Option<&ElementRef> {
        self.selection.current()
    }

    #[must_use]
    pub fn selection_state(&self) -> &SelectionState {
        self.selection.state()
    }

    /// Selects the first group labeled like `element`. Unknown groups are ignored.
    pub fn select(&mut self, element: &DataElement) -> bool {
        let changed = self.selection.select(&self.data_set, element);
        self.finish_selection_change(changed)
    }

    pub fn select_label(&mut self, label: &str) -> bool {
        let changed = self.selection.select_label(&self.data_set, label);
        self.finish_selection_change(changed)
    }

    /// Selects the group at `index`; out-of-range indices are a silent no-op.
    pub fn select_index(&mut self, index: usize) -> bool {
        let changed = self.selection.select_index(&self.data_set, index);
        self.finish_selection_change(changed)
    }

    pub fn deselect_all(&mut self) -> bool {
        let changed = self.selection.deselect_all();
        self.finish_selection_change(changed)
    }

    /// Selects the latest group holding data, or clears the selection when no
    /// group has any. Hosts call this after replacing the dataset when they
    /// want the "most recent period" default.
    pub fn auto_select_default(&mut self) -> bool {
        let changed = self.selection.auto_select_default(&self.data_set);
        self.finish_selection_change(changed)
    }

    /// Group under a point in viewport coordinates, label row included.
    #[must_use]
    pub fn element_index_at(&self, x: f64, y: f64) -> Option<usize> {
        element_index_at(self.config.viewport, self.data_set.len(), x, y)
    }

    /// Handles a tap/click: selects the group under the point.
    ///
    /// Misses leave the selection untouched.
    pub fn tap(&mut self, x: f64, y: f64) -> bool {
        match self.element_index_at(x, y) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    fn finish_selection_change(&mut self, changed: bool) -> bool {
        if changed {
            self.emit_plugin_event(PluginEvent::SelectionChanged {
                selection: self.selection.current().cloned(),
            });
        }
        changed
    }
}
