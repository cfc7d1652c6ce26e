mod rebuild_gate;

pub use rebuild_gate::{RebuildGate, RebuildPass};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Bar, DataElement, DataSet, ElementRef, default_selection};
use crate::render::Color;

/// Which group, if any, is highlighted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: Option<ElementRef>,
}

impl SelectionState {
    #[must_use]
    pub fn none() -> Self {
        Self { selected: None }
    }

    #[must_use]
    pub fn with_selected(selected: ElementRef) -> Self {
        Self {
            selected: Some(selected),
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ElementRef> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|selected| selected.index == index)
    }

    /// Display color for `bar` inside the group at `element_index`.
    #[must_use]
    pub fn bar_color(&self, data_set: &DataSet, element_index: usize, bar: &Bar) -> Color {
        if self.is_selected(element_index) {
            bar.highlight_color(data_set.selection_color())
        } else {
            bar.color
        }
    }
}

/// Single owner of the selection state.
///
/// Every mutating call returns `true` only when the selection actually
/// changed, so callers can emit exactly one notification per change.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub fn current(&self) -> Option<&ElementRef> {
        self.state.selected()
    }

    /// Selects the first group whose label matches `element`.
    ///
    /// Unknown groups leave the selection untouched.
    pub fn select(&mut self, data_set: &DataSet, element: &DataElement) -> bool {
        self.select_label(data_set, &element.label)
    }

    pub fn select_label(&mut self, data_set: &DataSet, label: &str) -> bool {
        match data_set.resolve_label(label) {
            Some(target) => self.apply(Some(target)),
            None => false,
        }
    }

    /// Selects the group at `index`; out-of-range indices are ignored.
    pub fn select_index(&mut self, data_set: &DataSet, index: usize) -> bool {
        match data_set.resolve_index(index) {
            Some(target) => self.apply(Some(target)),
            None => false,
        }
    }

    pub fn deselect_all(&mut self) -> bool {
        self.apply(None)
    }

    /// Selects the most recent group with data.
    ///
    /// Datasets with no positive value end up with nothing selected.
    pub fn auto_select_default(&mut self, data_set: &DataSet) -> bool {
        self.apply(default_selection(data_set))
    }

    /// Re-resolves the selected label against a replacement dataset.
    ///
    /// Clears the selection when the label no longer exists. Returns `true`
    /// when the stored reference changed.
    pub fn reconcile(&mut self, data_set: &DataSet) -> bool {
        let Some(selected) = self.state.selected.as_ref() else {
            return false;
        };
        let resolved = data_set.resolve_label(&selected.label);
        self.apply(resolved)
    }

    #[must_use]
    pub fn bar_color(&self, data_set: &DataSet, element_index: usize, bar: &Bar) -> Color {
        self.state.bar_color(data_set, element_index, bar)
    }

    fn apply(&mut self, next: Option<ElementRef>) -> bool {
        if self.state.selected == next {
            return false;
        }
        debug!(
            from = ?self.state.selected.as_ref().map(|selected| selected.label.as_str()),
            to = ?next.as_ref().map(|selected| selected.label.as_str()),
            "selection changed"
        );
        self.state.selected = next;
        true
    }
}
