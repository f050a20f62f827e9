//! # Drag session state machine
//!
//! One `ReorderController` owns at most one `DragSession`. The lifecycle:
//!
//! ```text
//! Idle --begin--> Dragging --end--> Settling --(settle done)--> Idle
//!                    |
//!                  cancel -----------------------------------> Idle
//! ```
//!
//! `begin`/`update`/`end` arrive from the long-press recognizer; `on_frame`
//! arrives once per display refresh and carries both the auto-scroll tick
//! and the settle animation forward. Everything runs on one logical thread;
//! the host's collection mutation and the session's index update happen in
//! the same call, with no render in between.
//!
//! Gesture validity failures are not errors. A failed `begin` creates
//! nothing; a failure mid-drag cancels, synchronously releasing the scroll
//! ticker and the floating visual.

use crate::autoscroll::{clamp_track_y, clamped_offset, scroll_zone_rate};
use crate::delegate::ReorderDelegate;
use crate::resolver::resolve_move;
use crate::table::TableHost;
use crate::ticker::{FrameScheduler, NoopScheduler, TickerGuard};
use crate::visual::FloatingVisual;
use log::{debug, trace};
use rowlift_core::{AnimatedValue, AnimationSpec, Interpolate, Rect, Transform, Vec2};
use std::rc::{Rc, Weak};

/// Scale applied to the floating visual while dragging.
const LIFT_SCALE: f32 = 1.1;
/// Opacity of the floating visual while dragging.
const LIFT_OPACITY: f32 = 0.85;

struct Settle {
    progress: AnimatedValue<f32>,
    from_frame: Rect,
    from_transform: Transform,
    from_opacity: f32,
    to_frame: Rect,
}

/// State for one long-press-to-reorder gesture, begin to settle.
pub struct DragSession {
    initial_index: usize,
    current_index: usize,
    visual: FloatingVisual,
    scroll_rate: f32,
    /// Latest pointer sample, in content coordinates. Shifted in lockstep
    /// with auto-scroll so a stationary finger keeps its content position.
    pointer: Vec2,
    lift: AnimatedValue<f32>,
    /// Held exactly while the session is in the dragging phase.
    ticker: Option<TickerGuard>,
    settle: Option<Settle>,
}

impl DragSession {
    /// Row under the finger when the gesture was recognized.
    pub fn initial_index(&self) -> usize {
        self.initial_index
    }

    /// Row currently standing in for the dragged row.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn scroll_rate(&self) -> f32 {
        self.scroll_rate
    }

    pub fn visual(&self) -> &FloatingVisual {
        &self.visual
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    /// Rect the settle animation is converging on, while settling.
    pub fn settle_target(&self) -> Option<Rect> {
        self.settle.as_ref().map(|settle| settle.to_frame)
    }
}

pub struct ReorderController {
    delegate: Option<Weak<dyn ReorderDelegate>>,
    scheduler: Rc<dyn FrameScheduler>,
    spec: AnimationSpec,
    session: Option<DragSession>,
}

impl Default for ReorderController {
    fn default() -> Self {
        Self::new()
    }
}

impl ReorderController {
    pub fn new() -> Self {
        Self {
            delegate: None,
            scheduler: Rc::new(NoopScheduler),
            spec: AnimationSpec::default(),
            session: None,
        }
    }

    /// Install the drag delegate, held weakly; the consumer manages its
    /// lifetime and should keep it alive across any in-flight drag.
    pub fn set_delegate(&mut self, delegate: Weak<dyn ReorderDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn set_scheduler(&mut self, scheduler: Rc<dyn FrameScheduler>) {
        self.scheduler = scheduler;
    }

    /// Spec for the lift and settle animations.
    pub fn set_animation_spec(&mut self, spec: AnimationSpec) {
        self.spec = spec;
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Whether the host should keep delivering `on_frame` calls.
    pub fn needs_frames(&self) -> bool {
        self.session.is_some()
    }

    fn delegate(&self) -> Option<Rc<dyn ReorderDelegate>> {
        self.delegate.as_ref()?.upgrade()
    }

    /// True when the host's rows changed under a dragging session and the
    /// reserved index no longer exists. Settling sessions never index the
    /// host, so they are exempt.
    fn session_index_stale(&self, host: &dyn TableHost) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.settle.is_none() && s.current_index >= host.row_count())
    }

    /// Try to start a drag at `pointer`. Unless the list has rows, the
    /// pointer lands on a movable row, and the delegate allows the drag,
    /// this returns false and creates nothing.
    pub fn begin(&mut self, host: &mut dyn TableHost, pointer: Vec2) -> bool {
        if self.session.is_some() || host.row_count() == 0 {
            return false;
        }
        let Some(index) = host.row_at_position(pointer) else {
            return false;
        };
        if !host.can_move_row(index) {
            return false;
        }
        let delegate = self.delegate();
        if delegate
            .as_ref()
            .is_some_and(|d| !d.should_begin_drag(index, pointer))
        {
            return false;
        }

        let mut snapshot = host.snapshot_row(index);
        if let Some(d) = &delegate {
            snapshot = d.dragging_visual(snapshot, index);
        }
        let mut visual = FloatingVisual::new(snapshot, host.row_rect(index));
        if let Some(d) = &delegate {
            d.will_appear(&visual, index);
        }

        // Track the pointer from the first frame; scale and opacity tween in.
        let metrics = host.viewport();
        let y = clamp_track_y(pointer.y, metrics.content_height);
        visual.frame = visual.frame.centered_at(metrics.center_x(), y);
        let mut lift = AnimatedValue::new(0.0, self.spec);
        lift.set_target(1.0);

        host.set_row_hidden(index, true);
        debug!("drag began on row {index}");
        self.session = Some(DragSession {
            initial_index: index,
            current_index: index,
            visual,
            scroll_rate: 0.0,
            pointer,
            lift,
            ticker: Some(TickerGuard::start(self.scheduler.clone())),
            settle: None,
        });
        true
    }

    /// Feed a pointer-move sample into an in-flight drag.
    pub fn update(&mut self, host: &mut dyn TableHost, pointer: Vec2) {
        if self.session_index_stale(host) {
            // Rows changed under the gesture: force a clean reset.
            self.cancel(host);
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.settle.is_some() {
            return;
        }

        session.pointer = pointer;
        let metrics = host.viewport();
        let y = clamp_track_y(pointer.y, metrics.content_height);
        session.visual.frame = session.visual.frame.centered_at(metrics.center_x(), y);
        session.scroll_rate = scroll_zone_rate(pointer.y, &metrics);
        Self::resolve_target(host, session);
    }

    /// One display-refresh tick. While dragging this applies the scroll
    /// rate and re-resolves the row target (scrolling moves rows under a
    /// stationary finger); while settling it advances the settle animation
    /// and finishes the session when the animation completes.
    pub fn on_frame(&mut self, host: &mut dyn TableHost) {
        if self.session_index_stale(host) {
            self.cancel(host);
            return;
        }
        let Some(mut session) = self.session.take() else {
            return;
        };

        if session.settle.is_some() {
            if Self::advance_settle(&mut session) {
                self.session = Some(session);
            } else {
                // Settle finished: visual and session end here.
                debug!("drag settled on row {}", session.current_index);
                host.reload_visible_rows();
            }
            return;
        }

        session.lift.update();
        let t = *session.lift.get();
        session.visual.transform =
            Transform::identity().interpolate(&Transform::scale(LIFT_SCALE, LIFT_SCALE), t);
        session.visual.opacity = 1.0f32.interpolate(&LIFT_OPACITY, t);

        if session.scroll_rate != 0.0 && session.pointer.is_finite() {
            let metrics = host.viewport();
            let new_offset = clamped_offset(metrics.offset, session.scroll_rate, &metrics);
            let scrolled = new_offset - metrics.offset;
            if scrolled != 0.0 {
                host.set_scroll_offset(new_offset);
                // The finger is stationary in viewport space, so its
                // content-space position moves with the scroll.
                session.pointer.y += scrolled;
                trace!("auto-scroll to {new_offset}");
            }

            let metrics = host.viewport();
            let y = clamp_track_y(session.pointer.y, metrics.content_height);
            session.visual.frame = session.visual.frame.centered_at(metrics.center_x(), y);
            Self::resolve_target(host, &mut session);
        }

        self.session = Some(session);
    }

    /// Release: stop the scroll ticker and settle the visual onto the row
    /// it currently occupies. No-op without a dragging session; cancels
    /// instead when the reserved row no longer exists.
    pub fn end(&mut self, host: &mut dyn TableHost) {
        if self.session_index_stale(host) {
            self.cancel(host);
            return;
        }
        let delegate = self.delegate();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.settle.is_some() {
            return;
        }

        session.ticker = None;
        session.scroll_rate = 0.0;
        if let Some(d) = delegate {
            d.will_disappear(&session.visual, session.current_index);
        }

        let target = host.row_rect(session.current_index);
        let mut progress = AnimatedValue::new(0.0, self.spec);
        progress.set_target(1.0);
        session.settle = Some(Settle {
            progress,
            from_frame: session.visual.frame,
            from_transform: session.visual.transform,
            from_opacity: session.visual.opacity,
            to_frame: target,
        });
        debug!("drag ended; settling onto row {}", session.current_index);
    }

    /// Force-reset mid-gesture. Synchronously releases the scroll ticker
    /// and the floating visual; nothing is left dangling.
    pub fn cancel(&mut self, host: &mut dyn TableHost) {
        let delegate = self.delegate();
        if let Some(session) = self.session.take() {
            debug!("drag cancelled on row {}", session.current_index);
            if let Some(d) = delegate {
                d.will_disappear(&session.visual, session.current_index);
            }
            host.reload_visible_rows();
            // Dropping the session stops the ticker and frees the visual.
        }
    }

    /// Returns true while the settle animation is still running.
    fn advance_settle(session: &mut DragSession) -> bool {
        let Some(settle) = session.settle.as_mut() else {
            return false;
        };
        let ongoing = settle.progress.update();
        let t = *settle.progress.get();
        session.visual.frame = settle.from_frame.interpolate(&settle.to_frame, t);
        session.visual.transform = settle
            .from_transform
            .interpolate(&Transform::identity(), t);
        session.visual.opacity = settle.from_opacity.interpolate(&1.0, t);
        ongoing
    }

    /// Commit a reorder when the resolver says the pointer has crossed the
    /// hysteresis threshold. The host mutation and the session's index
    /// update happen together; nothing can observe one without the other.
    fn resolve_target(host: &mut dyn TableHost, session: &mut DragSession) {
        if let Some(to) = resolve_move(
            &*host,
            session.pointer,
            session.initial_index,
            session.current_index,
        ) {
            trace!("reorder row {} -> {}", session.current_index, to);
            host.move_row(session.current_index, to);
            session.current_index = to;
        }
    }
}
