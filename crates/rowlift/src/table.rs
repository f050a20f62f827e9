//! # Host table surface
//!
//! The interaction layer never owns the rows or the viewport; it talks to
//! the consuming application through `TableHost`. The host owns the backing
//! collection and must apply `move_row` to it before returning, so the
//! visual order and the data order never diverge within a tick.
//!
//! `ViewportMetrics` is a read-only snapshot taken fresh each tick — the
//! scrollable view owns the true state, so nothing here is cached.

use crate::rows::Rows;
use crate::visual::CellSnapshot;
use log::trace;
use rowlift_core::*;
use smallvec::SmallVec;

/// Per-tick snapshot of the scrollable viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub width: f32,
    /// Visible height of the viewport.
    pub height: f32,
    /// Total height of the scrolled content.
    pub content_height: f32,
    pub insets: EdgeInsets,
    /// Current vertical scroll offset.
    pub offset: f32,
}

impl ViewportMetrics {
    /// Horizontal center in content coordinates (no horizontal scrolling).
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// Capabilities the consuming application provides. Positions and rects are
/// in content coordinates (they scroll with the rows).
///
/// `can_move_row`, `target_index_for_move`, `set_row_hidden`, and
/// `reload_visible_rows` have defaults so a host implements only what it
/// needs. The hidden flag set on the pressed row travels with the row
/// through `move_row`; `reload_visible_rows` clears it.
pub trait TableHost {
    fn row_count(&self) -> usize;
    fn row_rect(&self, index: usize) -> Rect;
    fn row_at_position(&self, position: Vec2) -> Option<usize>;
    /// Rasterize one row cell for the floating visual.
    fn snapshot_row(&self, index: usize) -> CellSnapshot;
    /// Move the row at `from` so it ends up at index `to`, applied to the
    /// backing collection before returning.
    fn move_row(&mut self, from: usize, to: usize);
    fn viewport(&self) -> ViewportMetrics;
    fn set_scroll_offset(&mut self, offset: f32);

    fn can_move_row(&self, _index: usize) -> bool {
        true
    }

    /// Remap a proposed drop target (e.g. to keep a row inside its group).
    fn target_index_for_move(&self, _from: usize, proposed: usize) -> usize {
        proposed
    }

    fn set_row_hidden(&mut self, _index: usize, _hidden: bool) {}

    /// Refresh the on-screen rows after a drag settles or cancels.
    fn reload_visible_rows(&mut self) {}
}

/// Indices of the rows intersecting the viewport, top to bottom.
pub fn visible_rows(host: &dyn TableHost) -> SmallVec<[usize; 16]> {
    let metrics = host.viewport();
    let top = metrics.offset;
    let bottom = metrics.offset + metrics.height;
    let mut out = SmallVec::new();
    for index in 0..host.row_count() {
        let rect = host.row_rect(index);
        if rect.y + rect.h > top && rect.y < bottom {
            out.push(index);
        }
    }
    out
}

struct RowSlot<T> {
    value: T,
    hidden: bool,
}

/// A ready-made host for lists of uniform-height rows, backed by `Rows<T>`.
/// Demos and simple consumers can use it directly; anything with variable
/// heights or sections implements `TableHost` itself.
pub struct FixedRowTable<T> {
    rows: Rows<RowSlot<T>>,
    row_height: f32,
    width: f32,
    height: f32,
    insets: EdgeInsets,
    offset: f32,
}

impl<T> FixedRowTable<T> {
    pub fn new(items: Vec<T>, row_height: f32, width: f32, height: f32) -> Self {
        Self {
            rows: items
                .into_iter()
                .map(|value| RowSlot {
                    value,
                    hidden: false,
                })
                .collect(),
            row_height,
            width,
            height,
            insets: EdgeInsets::default(),
            offset: 0.0,
        }
    }

    pub fn set_insets(&mut self, insets: EdgeInsets) {
        self.insets = insets;
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|slot| &slot.value)
    }

    pub fn is_row_hidden(&self, index: usize) -> bool {
        self.rows.get(index).map(|slot| slot.hidden).unwrap_or(false)
    }
}

impl<T> TableHost for FixedRowTable<T> {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_rect(&self, index: usize) -> Rect {
        Rect::new(0.0, index as f32 * self.row_height, self.width, self.row_height)
    }

    fn row_at_position(&self, position: Vec2) -> Option<usize> {
        if position.y < 0.0 || self.row_height <= 0.0 {
            return None;
        }
        let index = (position.y / self.row_height).floor() as usize;
        (index < self.rows.len()).then_some(index)
    }

    fn snapshot_row(&self, index: usize) -> CellSnapshot {
        CellSnapshot {
            size: Size {
                width: self.width,
                height: self.row_height,
            },
            handle: index as u64,
        }
    }

    fn move_row(&mut self, from: usize, to: usize) {
        self.rows.move_row(from, to);
    }

    fn viewport(&self) -> ViewportMetrics {
        ViewportMetrics {
            width: self.width,
            height: self.height,
            content_height: self.rows.len() as f32 * self.row_height,
            insets: self.insets,
            offset: self.offset,
        }
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn set_row_hidden(&mut self, index: usize, hidden: bool) {
        if let Some(slot) = self.rows.get_mut(index) {
            slot.hidden = hidden;
        }
    }

    fn reload_visible_rows(&mut self) {
        trace!("reloading rows {:?}", visible_rows(&*self));
        for slot in self.rows.iter_mut() {
            slot.hidden = false;
        }
    }
}
