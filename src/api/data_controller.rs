use tracing::debug;

use crate::core::{DataSet, max_value};
use crate::render::Renderer;

use super::{BarChartEngine, PluginEvent};

impl<R: Renderer> BarChartEngine<R> {
    /// Replaces the dataset.
    ///
    /// An existing selection follows its label into the new dataset and is
    /// dropped silently when the label is gone. No automatic default
    /// selection happens here; hosts opt in via `auto_select_default`.
    pub fn set_data_set(&mut self, data_set: DataSet) {
        debug!(
            elements = data_set.len(),
            bars = data_set.bar_count(),
            has_limit = data_set.limit().is_some(),
            "set data set"
        );
        self.data_set = data_set;
        self.selection.reconcile(&self.data_set);
        self.last_layout = None;
        self.emit_plugin_event(PluginEvent::DataSetReplaced {
            elements_len: self.data_set.len(),
        });
    }

    pub fn clear_data_set(&mut self) {
        self.set_data_set(DataSet::default());
    }

    #[must_use]
    pub fn data_set(&self) -> &DataSet {
        &self.data_set
    }

    /// Normalization maximum of the current dataset.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        max_value(&self.data_set)
    }
}
