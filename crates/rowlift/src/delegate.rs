use crate::visual::{CellSnapshot, FloatingVisual};
use rowlift_core::Vec2;

/// Hooks for customizing the floating visual and vetoing drags. Every
/// method has a default, so a consumer implements only what it needs.
///
/// The controller holds the delegate weakly and never owns it. The
/// consumer keeps the `Rc` alive for as long as drags should see the
/// customized behavior; once it drops, every hook falls back to its
/// default.
pub trait ReorderDelegate {
    /// Substitute or decorate the snapshot used for the floating visual.
    /// Default: the row's own snapshot, unchanged.
    fn dragging_visual(&self, snapshot: CellSnapshot, _index: usize) -> CellSnapshot {
        snapshot
    }

    /// The floating visual is about to appear over `index`.
    fn will_appear(&self, _visual: &FloatingVisual, _index: usize) {}

    /// The floating visual is about to disappear at `index`.
    fn will_disappear(&self, _visual: &FloatingVisual, _index: usize) {}

    /// Veto point for starting a drag on `index`. Default: allow.
    fn should_begin_drag(&self, _index: usize, _pointer: Vec2) -> bool {
        true
    }
}

/// All-defaults delegate.
pub struct DefaultDelegate;

impl ReorderDelegate for DefaultDelegate {}
