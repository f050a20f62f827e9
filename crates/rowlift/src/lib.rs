//! # Rowlift
//!
//! Long-press drag-to-reorder for scrollable row lists: hold a row to lift
//! it into a floating visual, drag to reorder with auto-scroll near the
//! viewport edges, release to settle it into place.
//!
//! The crate is an embeddable interaction layer, not a widget toolkit. The
//! consuming application keeps owning its rows, its viewport, and its
//! rendering; it implements [`TableHost`] and forwards pointer events and
//! frame ticks:
//!
//! ```rust
//! use rowlift::*;
//! use rowlift_core::*;
//! use web_time::Instant;
//!
//! let mut host = FixedRowTable::new(vec!["a", "b", "c"], 44.0, 320.0, 600.0);
//! let mut list = ReorderList::new();
//!
//! let t = Instant::now();
//! list.handle_pointer(&mut host, &PointerEvent::down(Vec2::new(10.0, 50.0), t));
//! // ... keep forwarding moves/up, call list.on_frame(&mut host, now)
//! // each display refresh while list.needs_frames() ...
//! ```
//!
//! Customization goes through [`ReorderDelegate`] (all methods defaulted,
//! held weakly) and the host's optional `can_move_row` /
//! `target_index_for_move` hooks.

pub mod autoscroll;
pub mod delegate;
pub mod gestures;
pub mod resolver;
pub mod rows;
pub mod session;
pub mod table;
pub mod ticker;
pub mod visual;


pub use autoscroll::{SCROLL_STEP, VISUAL_DRIFT_LIMIT, clamped_offset, scroll_zone_rate};
pub use delegate::{DefaultDelegate, ReorderDelegate};
pub use gestures::{LONG_PRESS_DELAY, TOUCH_SLOP, LongPress, LongPressPhase, ReorderList};
pub use resolver::resolve_move;
pub use rows::Rows;
pub use session::{DragSession, ReorderController};
pub use table::{FixedRowTable, TableHost, ViewportMetrics, visible_rows};
pub use ticker::{FrameScheduler, NoopScheduler, TickerGuard};
pub use visual::{CellSnapshot, FloatingVisual};
