use rowlift_core::*;

/// Rasterized image of one row cell. The pixel data stays with the platform
/// renderer; the interaction layer only carries its size and an opaque
/// handle (texture id, layer id, whatever the renderer hands out).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellSnapshot {
    pub size: Size,
    pub handle: u64,
}

/// The detached representation of the dragged row, rendered above the list.
///
/// Owned exclusively by the drag session: created when the gesture is
/// recognized, destroyed when the settle animation completes (or the
/// gesture is cancelled). `frame` is the untransformed rect in content
/// coordinates; renderers draw `on_screen_rect()` at `opacity`.
#[derive(Clone, Debug)]
pub struct FloatingVisual {
    pub snapshot: CellSnapshot,
    pub frame: Rect,
    pub transform: Transform,
    pub opacity: f32,
}

impl FloatingVisual {
    pub(crate) fn new(snapshot: CellSnapshot, frame: Rect) -> Self {
        Self {
            snapshot,
            frame,
            transform: Transform::identity(),
            opacity: 1.0,
        }
    }

    pub fn on_screen_rect(&self) -> Rect {
        self.transform.apply_to_rect(self.frame)
    }
}
