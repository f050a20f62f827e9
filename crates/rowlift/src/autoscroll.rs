//! Pure geometry for auto-scroll: zone rates and offset clamping. No state,
//! no side effects; everything the session needs each tick is recomputed
//! from the pointer and a fresh `ViewportMetrics` snapshot.

use crate::table::ViewportMetrics;

/// The viewport splits into top zone / dead zone / bottom zone at 1:4:1.
pub const SCROLL_ZONE_DIVISOR: f32 = 6.0;

/// Pixels scrolled per tick at rate 1.0.
pub const SCROLL_STEP: f32 = 10.0;

/// How far past the content bounds the floating visual may track the
/// pointer, in either direction.
pub const VISUAL_DRIFT_LIMIT: f32 = 50.0;

/// Signed scroll rate for a pointer at `pointer_y` (content coordinates).
///
/// Zero in the middle 4/6 of the effective viewport (height minus the top
/// inset). In the edge zones the rate is the fractional penetration past
/// the zone edge: negative above the top edge, positive below the bottom
/// edge. The value is intentionally not clamped to [-1, 1]: the further
/// the pointer travels past the zone edge, the faster the list scrolls.
pub fn scroll_zone_rate(pointer_y: f32, metrics: &ViewportMetrics) -> f32 {
    let effective = metrics.height - metrics.insets.top;
    if effective <= 0.0 {
        return 0.0;
    }
    let zone = effective / SCROLL_ZONE_DIVISOR;
    let top_edge = metrics.offset + metrics.insets.top + zone;
    let bottom_edge = metrics.offset + metrics.insets.top + effective - zone;

    if pointer_y >= bottom_edge {
        (pointer_y - bottom_edge) / zone
    } else if pointer_y <= top_edge {
        (pointer_y - top_edge) / zone
    } else {
        0.0
    }
}

/// Advance `offset` by one tick at `rate`, clamped to the scrollable range
/// `[-top_inset, content_height + bottom_inset - viewport_height]`. When the
/// content (plus bottom inset) is shorter than the viewport there is nothing
/// to scroll and the offset comes back unchanged.
pub fn clamped_offset(offset: f32, rate: f32, metrics: &ViewportMetrics) -> f32 {
    let proposed = offset + rate * SCROLL_STEP;
    let max = metrics.content_height + metrics.insets.bottom - metrics.height;

    if proposed < -metrics.insets.top {
        -metrics.insets.top
    } else if metrics.content_height + metrics.insets.bottom < metrics.height {
        offset
    } else if proposed > max {
        max
    } else {
        proposed
    }
}

/// Clamp the tracked pointer height into the band the floating visual is
/// allowed to occupy.
pub fn clamp_track_y(pointer_y: f32, content_height: f32) -> f32 {
    pointer_y.clamp(-VISUAL_DRIFT_LIMIT, content_height + VISUAL_DRIFT_LIMIT)
}
