use crate::geometry::Vec2;
use bitflags::bitflags;
use web_time::Instant;

bitflags! {
    /// Pointer buttons held during an event. A touch contact reports PRIMARY.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct PointerButtons: u8 {
        const PRIMARY   = 1 << 0;
        const SECONDARY = 1 << 1;
        const MIDDLE    = 1 << 2;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEventKind {
    Down(PointerButtons),
    Move,
    Up(PointerButtons),
    /// The platform took the pointer away (system gesture, focus loss).
    Cancel,
}

/// One pointer sample, timestamped by the platform. Positions are in the
/// scrolled content's coordinate space, the same space row rects live in.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent {
    pub position: Vec2,
    pub kind: PointerEventKind,
    pub time: Instant,
}

impl PointerEvent {
    pub fn down(position: Vec2, time: Instant) -> Self {
        Self {
            position,
            kind: PointerEventKind::Down(PointerButtons::PRIMARY),
            time,
        }
    }

    pub fn moved(position: Vec2, time: Instant) -> Self {
        Self {
            position,
            kind: PointerEventKind::Move,
            time,
        }
    }

    pub fn up(position: Vec2, time: Instant) -> Self {
        Self {
            position,
            kind: PointerEventKind::Up(PointerButtons::PRIMARY),
            time,
        }
    }

    pub fn cancel(position: Vec2, time: Instant) -> Self {
        Self {
            position,
            kind: PointerEventKind::Cancel,
            time,
        }
    }
}
