use std::cell::Cell;
use std::rc::Rc;

/// Single-flight guard around full rebuild passes.
///
/// A nested attempt to enter while a pass is running is refused instead of
/// blocking. Clones share the same flag, so host callbacks holding a clone
/// observe the engine's pass.
#[derive(Debug, Clone, Default)]
pub struct RebuildGate {
    in_progress: Rc<Cell<bool>>,
}

impl RebuildGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a pass, or returns `None` when one is already running.
    ///
    /// The pass ends when the returned token is dropped.
    #[must_use]
    pub fn try_enter(&self) -> Option<RebuildPass> {
        if self.in_progress.replace(true) {
            return None;
        }
        Some(RebuildPass {
            in_progress: Rc::clone(&self.in_progress),
        })
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress.get()
    }
}

/// Token for a running rebuild pass.
#[derive(Debug)]
pub struct RebuildPass {
    in_progress: Rc<Cell<bool>>,
}

impl Drop for RebuildPass {
    fn drop(&mut self) {
        self.in_progress.set(false);
    }
}
