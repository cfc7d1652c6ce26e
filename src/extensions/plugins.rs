use serde::{Deserialize, Serialize};

use crate::core::{ElementRef, Viewport};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub elements_len: usize,
    pub max_value: f64,
    pub selection: Option<ElementRef>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    /// Emitted once per selection change; `None` means nothing is selected.
    SelectionChanged { selection: Option<ElementRef> },
    DataSetReplaced { elements_len: usize },
    ViewportChanged { width: u32, height: u32 },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating core
/// state directly. Selection listeners are plugins too.
pub trait ChartPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &PluginEvent, context: &PluginContext);
}

/// Adapts a closure into a plugin that only hears selection changes.
pub struct SelectionListener<F>
where
    F: FnMut(Option<&ElementRef>),
{
    id: String,
    callback: F,
}

impl<F> SelectionListener<F>
where
    F: FnMut(Option<&ElementRef>),
{
    #[must_use]
    pub fn new(id: impl Into<String>, callback: F) -> Self {
        Self {
            id: id.into(),
            callback,
        }
    }
}

impl<F> ChartPlugin for SelectionListener<F>
where
    F: FnMut(Option<&ElementRef>),
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: &PluginEvent, _context: &PluginContext) {
        if let PluginEvent::SelectionChanged { selection } = event {
            (self.callback)(selection.as_ref());
        }
    }
}
